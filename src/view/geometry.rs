//! Proportional layout helpers for tabs, sidebar bands and grid cells
//!
//! Every rectangle drawn by the view is derived here from the viewport size and
//! the fractions in [`UiConfig`](crate::config::UiConfig). Nothing is cached:
//! callers recompute the layout each frame, since both the window size and the
//! configuration may change between frames.
//!
//! All functions here are pure (no I/O, no side effects) and can be
//! tested independently of the rendering infrastructure.

use crate::config::TabUiConf;

// ============================================================================
// Primitive shapes
// ============================================================================

/// A point in screen coordinates
pub type Point = (f32, f32);

/// Size of the drawable area for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle, top-left anchored
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle of `size` centered on `center`
    pub fn from_center(center: Point, size: (f32, f32)) -> Self {
        Self {
            x: center.0 - size.0 * 0.5,
            y: center.1 - size.1 * 0.5,
            width: size.0,
            height: size.1,
        }
    }

    pub fn center(&self) -> Point {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink by `amount` in each dimension, keeping the same center.
    ///
    /// Never produces a negative size.
    pub fn shrink(&self, amount: f32) -> Self {
        Self::from_center(
            self.center(),
            (
                (self.width - amount).max(0.0),
                (self.height - amount).max(0.0),
            ),
        )
    }

    /// Horizontal slice of this rectangle covering `band`
    pub fn slice(&self, band: Band) -> Self {
        Self::new(self.x, band.top, self.width, band.height())
    }

    /// True when `other` lies entirely within this rectangle
    pub fn encloses(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

// ============================================================================
// Edge-anchored panels
// ============================================================================

/// Screen edge a panel grows inward from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Rectangle spanning from `edge` inward by `fraction` of the matching dimension.
///
/// Fractions are clamped to `[0, 1]`: 0 gives a zero-size panel on that edge,
/// 1 gives the full viewport.
pub fn edge_panel(viewport: Viewport, edge: Edge, fraction: f32) -> Rect {
    let fraction = clamp_fraction(fraction);
    let (w, h) = (viewport.width, viewport.height);

    match edge {
        Edge::Left => Rect::new(0.0, 0.0, w * fraction, h),
        Edge::Right => Rect::new(w - w * fraction, 0.0, w * fraction, h),
        Edge::Top => Rect::new(0.0, 0.0, w, h * fraction),
        Edge::Bottom => Rect::new(0.0, h - h * fraction, w, h * fraction),
    }
}

/// Main tab area: left-anchored, `tab.width` of the viewport wide and
/// `tab.height` of it tall.
pub fn tab_region(viewport: Viewport, tab: &TabUiConf) -> Rect {
    let mut region = edge_panel(viewport, Edge::Left, tab.width);
    region.height = viewport.height * clamp_fraction(tab.height);
    region
}

/// Height of a single tab row (title, column labels and data rows share it)
pub fn row_height(viewport: Viewport, tab: &TabUiConf) -> f32 {
    viewport.height * clamp_fraction(tab.row_height)
}

fn clamp_fraction(fraction: f32) -> f32 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

// ============================================================================
// Stacked bands
// ============================================================================

/// Vertical extent of one horizontal strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub top: f32,
    pub bottom: f32,
}

impl Band {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn middle(&self) -> f32 {
        (self.top + self.bottom) * 0.5
    }
}

/// Band starting at `top` and covering `fraction` of `total` height.
///
/// The caller chains bands by feeding each band's `bottom` in as the next `top`.
pub fn stacked_band(top: f32, fraction: f32, total: f32) -> Band {
    Band::new(top, top + clamp_fraction(fraction) * total)
}

/// Sequential band allocator: each pushed band starts where the previous ended
#[derive(Debug, Clone)]
pub struct BandStack {
    next_top: f32,
    total: f32,
}

impl BandStack {
    pub fn new(top: f32, total: f32) -> Self {
        Self {
            next_top: top,
            total,
        }
    }

    /// Allocate the next band of `fraction × total` height
    pub fn push(&mut self, fraction: f32) -> Band {
        let band = stacked_band(self.next_top, fraction, self.total);
        self.next_top = band.bottom;
        band
    }

    /// Top edge of the next band to be pushed
    pub fn next_top(&self) -> f32 {
        self.next_top
    }
}

// ============================================================================
// Column and row banding
// ============================================================================

/// Equal-width vertical strips across a region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnBands {
    x: f32,
    width: f32,
    count: usize,
}

impl ColumnBands {
    /// Split `region_width` starting at `x` into `count` equal columns.
    ///
    /// Returns None for zero columns.
    pub fn split(x: f32, region_width: f32, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        Some(Self {
            x,
            width: region_width / count as f32,
            count,
        })
    }

    /// `count` columns of a fixed `width` each
    pub fn fixed(x: f32, width: f32, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        Some(Self { x, width, count })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn left(&self, col: usize) -> f32 {
        self.x + self.width * col as f32
    }

    pub fn center(&self, col: usize) -> f32 {
        self.left(col) + self.width * 0.5
    }
}

/// Horizontal strips of a grid: `header_bands` fixed bands followed by data rows,
/// all `row_height` tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowBands {
    top: f32,
    row_height: f32,
    header_bands: usize,
}

impl RowBands {
    pub fn new(top: f32, row_height: f32, header_bands: usize) -> Self {
        Self {
            top,
            row_height,
            header_bands,
        }
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Header band `index` (0 is the topmost)
    pub fn header(&self, index: usize) -> Band {
        let top = self.top + self.row_height * index as f32;
        Band::new(top, top + self.row_height)
    }

    /// Data row `index` on screen, below all header bands
    pub fn row(&self, index: usize) -> Band {
        self.header(self.header_bands + index)
    }

    pub fn row_center(&self, index: usize) -> f32 {
        self.row(index).middle()
    }

    /// Top edge of the first data row
    pub fn data_top(&self) -> f32 {
        self.header(self.header_bands).top
    }

    /// Number of whole data rows that fit above `bottom`
    pub fn rows_fitting(&self, bottom: f32) -> usize {
        if self.row_height <= 0.0 || !self.row_height.is_finite() {
            return 0;
        }
        let available = bottom - self.data_top();
        if available <= 0.0 {
            return 0;
        }
        // Tolerate float noise so that an exact fit is not lost to rounding
        (available / self.row_height + 1e-3).floor() as usize
    }
}

// ============================================================================
// Grid layout
// ============================================================================

/// Header bands above the data rows of every tab grid: title and column labels
pub const TAB_HEADER_BANDS: usize = 2;

/// Cell geometry for one tab grid (index column included as grid column 0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub region: Rect,
    pub columns: ColumnBands,
    pub rows: RowBands,
}

impl GridLayout {
    /// Lay out `column_count` columns (including the index column) inside `region`.
    ///
    /// With `column_fraction` set, each column is that fraction of the region
    /// width; otherwise the width is shared equally. Returns None when there is
    /// nothing to lay out.
    pub fn new(
        region: Rect,
        row_height: f32,
        column_count: usize,
        column_fraction: Option<f32>,
    ) -> Option<Self> {
        let columns = match column_fraction {
            Some(fraction) => ColumnBands::fixed(
                region.x,
                region.width * clamp_fraction(fraction),
                column_count,
            ),
            None => ColumnBands::split(region.x, region.width, column_count),
        }?;

        Some(Self {
            region,
            columns,
            rows: RowBands::new(region.y, row_height, TAB_HEADER_BANDS),
        })
    }

    /// Full-width title band
    pub fn title_band(&self) -> Rect {
        self.region.slice(self.rows.header(0))
    }

    /// Center of a column label in the label band
    pub fn label_center(&self, col: usize) -> Point {
        (self.columns.center(col), self.rows.header(1).middle())
    }

    /// Bounds of the cell at on-screen `row` and grid column `col`
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let band = self.rows.row(row);
        Rect::new(
            self.columns.left(col),
            band.top,
            self.columns.width(),
            band.height(),
        )
    }

    pub fn cell_center(&self, row: usize, col: usize) -> Point {
        (self.columns.center(col), self.rows.row_center(row))
    }

    /// Number of data rows that fit in the region below the headers
    pub fn visible_rows(&self) -> usize {
        self.rows.rows_fitting(self.region.bottom())
    }
}
