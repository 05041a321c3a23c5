//! Cursor highlight for the active grid cell
//!
//! A selected cell is filled with the cursor color. A hovered cell gets an
//! outline: the cell is filled with the cursor color, then an inset rectangle
//! is punched back out in the background color. Cell text is always drawn
//! after these rectangles.

use super::geometry::Rect;
use super::surface::DrawCmd;
use crate::model::DisplayCursor;
use crate::theme::{Color, Palette};

/// How much smaller the punched-out rectangle of an outline is, per dimension
pub const CURSOR_INSET: f32 = 5.0;

/// Overlay shape for one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlay {
    Filled(Rect),
    Outlined { outer: Rect, inner: Rect },
}

impl Overlay {
    /// Overlay for the cell at logical (`row`, `col`), None unless the cursor is on it.
    ///
    /// `col` is the data column, i.e. grid column minus the index column.
    pub fn for_cell(row: usize, col: usize, cursor: &DisplayCursor, cell: Rect) -> Option<Self> {
        if !cursor.is_at(row, col) {
            return None;
        }

        Some(if cursor.selected {
            Overlay::Filled(cell)
        } else {
            Overlay::Outlined {
                outer: cell,
                inner: cell.shrink(CURSOR_INSET),
            }
        })
    }

    /// Rectangle fills in draw order
    pub fn fills(&self, palette: &Palette) -> Vec<(Rect, Color)> {
        match *self {
            Overlay::Filled(rect) => vec![(rect, palette.cursor)],
            Overlay::Outlined { outer, inner } => {
                vec![(outer, palette.cursor), (inner, palette.background)]
            }
        }
    }

    /// Color for the cell's text so it stays legible on top of the overlay
    pub fn text_color(&self, palette: &Palette) -> Color {
        match self {
            Overlay::Filled(_) => palette.text_alt,
            Overlay::Outlined { .. } => palette.text,
        }
    }
}

/// Rectangle draw commands highlighting the cell at (`row`, `col`), empty when
/// the cursor is elsewhere.
pub fn highlight(
    row: usize,
    col: usize,
    cursor: &DisplayCursor,
    cell: Rect,
    palette: &Palette,
) -> Vec<DrawCmd> {
    Overlay::for_cell(row, col, cursor, cell)
        .map(|overlay| {
            overlay
                .fills(palette)
                .into_iter()
                .map(|(rect, color)| DrawCmd::Rect { rect, color })
                .collect()
        })
        .unwrap_or_default()
}
