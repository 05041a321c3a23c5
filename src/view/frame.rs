//! Pixel buffer wrapper for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use super::geometry::Rect;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB); `alpha` is the blend ratio.
/// Returns the blended color with full opacity (alpha = 0xFF).
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, the height is reduced to
    /// what the buffer actually holds.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if width > 0 {
            height.min(buffer.len() / width)
        } else {
            0
        };

        Self {
            buffer,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Pixel bounds of `rect` clipped to the frame: (x0, y0, x1, y1), end exclusive
    fn clip(&self, rect: Rect) -> (usize, usize, usize, usize) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width);
        let y0 = (rect.y.max(0.0) as usize).min(self.height);
        let x1 = (rect.right().max(0.0) as usize).min(self.width);
        let y1 = (rect.bottom().max(0.0) as usize).min(self.height);
        (x0, y0, x1, y1)
    }

    /// Fill a rectangle. Colors with an alpha below 0xFF are blended.
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }

        let (x0, y0, x1, y1) = self.clip(rect);
        for y in y0..y1 {
            let row_start = y * self.width;
            for idx in row_start + x0..row_start + x1 {
                self.buffer[idx] = if alpha >= 1.0 {
                    color
                } else {
                    blend_colors(self.buffer[idx], color, alpha)
                };
            }
        }
    }

    /// Blend a single pixel at `alpha` coverage (bounds-checked)
    #[inline]
    pub fn blend_pixel(&mut self, x: isize, y: isize, color: u32, alpha: f32) {
        if x < 0 || y < 0 || alpha <= 0.0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = y * self.width + x;
        self.buffer[idx] = if alpha >= 1.0 {
            color | 0xFF000000
        } else {
            blend_colors(self.buffer[idx], color, alpha)
        };
    }

    /// Get a single pixel (bounds-checked, returns 0 if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }
}
