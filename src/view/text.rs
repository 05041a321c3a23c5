//! Font loading and glyph rasterization

use std::collections::HashMap;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use fontdue::{Font, FontSettings, Metrics};

use super::frame::Frame;
use super::surface::FontRole;
use crate::config::FontConfig;

pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Monospace font used when no font file is configured
pub const EMBEDDED_FONT: &[u8] = include_bytes!("../../assets/DejaVuSansMono.ttf");

/// Load a TrueType/OpenType font from disk
pub fn load_font(path: &Path) -> Result<Font> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read font {}", path.display()))?;
    Font::from_bytes(bytes, FontSettings::default())
        .map_err(|e| anyhow!("Failed to parse font {}: {}", path.display(), e))
}

/// Vertical metrics for one font size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMetrics {
    pub size: f32,
    pub ascent: f32,
    pub line_height: f32,
}

impl SizeMetrics {
    fn new(font: &Font, size: f32) -> Self {
        match font.horizontal_line_metrics(size) {
            Some(lm) => Self {
                size,
                ascent: lm.ascent,
                line_height: lm.ascent - lm.descent,
            },
            // Fonts without a hhea table: approximate from the pixel size
            None => Self {
                size,
                ascent: size * 0.8,
                line_height: size,
            },
        }
    }
}

/// Text rendering context wrapping font and glyph cache.
///
/// Holds the two configured sizes and renders either depending on [`FontRole`].
pub struct TextPainter<'a> {
    font: &'a Font,
    glyph_cache: &'a mut GlyphCache,
    title: SizeMetrics,
    cell: SizeMetrics,
}

impl<'a> TextPainter<'a> {
    pub fn new(font: &'a Font, glyph_cache: &'a mut GlyphCache, sizes: &FontConfig) -> Self {
        Self {
            font,
            glyph_cache,
            title: SizeMetrics::new(font, sizes.title_size),
            cell: SizeMetrics::new(font, sizes.cell_size),
        }
    }

    pub fn metrics(&self, role: FontRole) -> SizeMetrics {
        match role {
            FontRole::Title => self.title,
            FontRole::Cell => self.cell,
        }
    }

    /// Width and height of `text` in pixels
    pub fn measure(&mut self, text: &str, role: FontRole) -> (f32, f32) {
        let metrics = self.metrics(role);
        let mut width = 0.0;
        for ch in text.chars() {
            let key = (ch, metrics.size.to_bits());
            let (glyph, _) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, metrics.size));
            width += glyph.advance_width;
        }
        (width, metrics.line_height)
    }

    /// Draw text with its top-left corner at (`x`, `y`)
    pub fn draw(
        &mut self,
        frame: &mut Frame,
        x: f32,
        y: f32,
        text: &str,
        role: FontRole,
        color: u32,
    ) {
        let metrics = self.metrics(role);
        let mut current_x = x;
        let baseline = y + metrics.ascent;

        for ch in text.chars() {
            let key = (ch, metrics.size.to_bits());
            let (glyph, bitmap) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, metrics.size));

            let glyph_top = baseline - glyph.height as f32 - glyph.ymin as f32;

            for (i, &coverage) in bitmap.iter().enumerate().take(glyph.width * glyph.height) {
                if coverage == 0 {
                    continue;
                }
                let px = current_x as isize + (i % glyph.width) as isize + glyph.xmin as isize;
                let py = (glyph_top + (i / glyph.width) as f32) as isize;
                frame.blend_pixel(px, py, color, coverage as f32 / 255.0);
            }

            current_x += glyph.advance_width;
        }
    }
}

/// A loaded font together with its glyph cache
pub struct FontSet {
    font: Font,
    glyph_cache: GlyphCache,
}

impl FontSet {
    pub fn new(font: Font) -> Self {
        Self {
            font,
            glyph_cache: GlyphCache::new(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        load_font(path).map(Self::new)
    }

    pub fn embedded() -> Result<Self> {
        Font::from_bytes(EMBEDDED_FONT, FontSettings::default())
            .map(Self::new)
            .map_err(|e| anyhow!("Failed to load embedded font: {}", e))
    }

    /// The configured font file, or the embedded font when none is set
    pub fn from_config(config: &FontConfig) -> Result<Self> {
        if config.file_path.as_os_str().is_empty() {
            Self::embedded()
        } else {
            Self::load(&config.file_path)
        }
    }

    /// Text painter rendering at the configured sizes
    pub fn painter(&mut self, sizes: &FontConfig) -> TextPainter<'_> {
        TextPainter::new(&self.font, &mut self.glyph_cache, sizes)
    }
}
