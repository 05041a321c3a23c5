//! Tab grid rendering: title band, column labels and paged data rows

use super::cursor::Overlay;
use super::geometry::GridLayout;
use super::surface::{FontRole, Surface};
use super::FrameContext;
use crate::format::{CellFormatter, CellValue, Column};
use crate::model::{ChainRow, DisplayCursor, PhraseRow, SongRow};

/// A row that can be shown in a tab grid
pub trait GridRow {
    /// One value per data column, index column excluded
    fn cells(&self) -> Vec<CellValue>;
}

impl GridRow for PhraseRow {
    fn cells(&self) -> Vec<CellValue> {
        vec![
            CellValue::Note(self.note),
            CellValue::Id(self.instrument),
            CellValue::Command(self.command),
        ]
    }
}

impl GridRow for ChainRow {
    fn cells(&self) -> Vec<CellValue> {
        vec![CellValue::Id(self.phrase)]
    }
}

impl GridRow for SongRow {
    fn cells(&self) -> Vec<CellValue> {
        vec![
            CellValue::Id(self.lead_1),
            CellValue::Id(self.lead_2),
            CellValue::Id(self.bass),
            CellValue::Id(self.perc),
        ]
    }
}

/// Slice of rows shown on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub first_row: usize,
    pub len: usize,
}

impl Page {
    /// The page of `visible` rows that contains `cursor_row`.
    ///
    /// A cursor past the end shows the last page.
    pub fn containing(cursor_row: usize, total: usize, visible: usize) -> Self {
        if total == 0 || visible == 0 {
            return Self {
                first_row: 0,
                len: 0,
            };
        }
        let last_page = (total - 1) / visible;
        let first_row = (cursor_row / visible).min(last_page) * visible;
        Self {
            first_row,
            len: visible.min(total - first_row),
        }
    }

    pub fn rows(&self) -> std::ops::Range<usize> {
        self.first_row..self.first_row + self.len
    }
}

/// Tab title centered in the title band
pub fn draw_title(ctx: &FrameContext, surface: &mut dyn Surface, layout: &GridLayout, title: &str) {
    surface.draw_text(
        title,
        layout.title_band().center(),
        FontRole::Title,
        ctx.palette.text,
    );
}

/// Column labels, aligned with the data columns below them
pub fn draw_column_labels(
    ctx: &FrameContext,
    surface: &mut dyn Surface,
    layout: &GridLayout,
    columns: &[Column],
) {
    for (col, column) in columns.iter().enumerate() {
        if column.label.is_empty() {
            continue;
        }
        surface.draw_text(
            column.label,
            layout.label_center(col),
            FontRole::Cell,
            ctx.palette.text,
        );
    }
}

/// Data rows for the page holding the cursor, with the cursor overlay.
///
/// Returns the page that was drawn.
pub fn draw_rows<R: GridRow>(
    ctx: &FrameContext,
    surface: &mut dyn Surface,
    layout: &GridLayout,
    columns: &[Column],
    rows: &[R],
    cursor: &DisplayCursor,
) -> Page {
    let page = Page::containing(cursor.row, rows.len(), layout.visible_rows());
    let formatter = CellFormatter::new(ctx.notes, rows.len());

    for (screen_row, row) in rows[page.rows()].iter().enumerate() {
        let row_index = page.first_row + screen_row;
        let values = std::iter::once(CellValue::Index(row_index)).chain(row.cells());

        for (grid_col, (column, value)) in columns.iter().zip(values).enumerate() {
            let cell = layout.cell_rect(screen_row, grid_col);
            let overlay = grid_col
                .checked_sub(1)
                .and_then(|col| Overlay::for_cell(row_index, col, cursor, cell));

            let color = match overlay {
                Some(overlay) => {
                    for (rect, color) in overlay.fills(ctx.palette) {
                        surface.fill_rect(rect, color);
                    }
                    overlay.text_color(ctx.palette)
                }
                None => ctx.palette.text,
            };

            let text = formatter.format(column.kind, &value);
            surface.draw_text(&text, cell.center(), FontRole::Cell, color);
        }
    }

    page
}

/// Title band, label band and the visible page of `rows`.
///
/// Draws nothing when there are no columns.
pub fn draw_grid<R: GridRow>(
    ctx: &FrameContext,
    surface: &mut dyn Surface,
    title: &str,
    columns: &[Column],
    rows: &[R],
    cursor: &DisplayCursor,
) -> Option<Page> {
    let layout = ctx.grid_layout(columns.len())?;

    draw_title(ctx, surface, &layout, title);
    draw_column_labels(ctx, surface, &layout, columns);
    let page = draw_rows(ctx, surface, &layout, columns, rows, cursor);

    tracing::trace!(
        "Grid '{}': rows {}..{} of {}",
        title,
        page.first_row,
        page.first_row + page.len,
        rows.len()
    );
    Some(page)
}
