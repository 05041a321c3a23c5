//! Per-screen tab composition

use super::geometry::{Rect, RowBands};
use super::grid::{draw_grid, Page};
use super::surface::{FontRole, Surface};
use super::FrameContext;
use crate::format::{Column, ColumnKind};
use crate::model::{DisplayCursor, Instrument, Screen};

pub const SONG_COLUMNS: [Column; 5] = [
    Column::index(),
    Column::new("LD-1", ColumnKind::Instrument),
    Column::new("LD-2", ColumnKind::Instrument),
    Column::new("BASS", ColumnKind::Instrument),
    Column::new("PERC", ColumnKind::Instrument),
];

pub const CHAIN_COLUMNS: [Column; 2] = [
    Column::index(),
    Column::new("PHRASE", ColumnKind::Instrument),
];

pub const PHRASE_COLUMNS: [Column; 4] = [
    Column::index(),
    Column::new("NOTE", ColumnKind::Note),
    Column::new("INST", ColumnKind::Instrument),
    Column::new("CMD", ColumnKind::Command),
];

pub const UNDER_CONSTRUCTION: &str = "Under Construction";

/// Text for the title band
pub fn tab_title(screen: &Screen) -> String {
    match screen {
        Screen::Song(_) => "Song".to_string(),
        Screen::Chain(chain) => format!("Chain {:02X}", chain.name),
        Screen::Phrase(phrase) => format!("Phrase {:02X}", phrase.name),
        Screen::Instrument(instrument) => format!("Instrument {:02X}", instrument.name),
    }
}

/// Columns shown by `screen`, index column first; empty for screens without a grid
pub fn columns(screen: &Screen) -> &'static [Column] {
    match screen {
        Screen::Song(_) => &SONG_COLUMNS,
        Screen::Chain(_) => &CHAIN_COLUMNS,
        Screen::Phrase(_) => &PHRASE_COLUMNS,
        Screen::Instrument(_) => &[],
    }
}

/// Draw the active tab into the tab region.
///
/// Returns the page of rows shown, None for screens without a grid or when
/// nothing fits.
pub fn draw_tab(
    ctx: &FrameContext,
    surface: &mut dyn Surface,
    screen: &Screen,
    cursor: &DisplayCursor,
) -> Option<Page> {
    let title = tab_title(screen);
    let columns = columns(screen);

    match screen {
        Screen::Song(song) => draw_grid(ctx, surface, &title, columns, &song.rows, cursor),
        Screen::Chain(chain) => draw_grid(ctx, surface, &title, columns, &chain.rows, cursor),
        Screen::Phrase(phrase) => draw_grid(ctx, surface, &title, columns, &phrase.rows, cursor),
        Screen::Instrument(instrument) => {
            draw_instrument(ctx, surface, instrument, &title);
            None
        }
    }
}

/// Instrument editing is not available yet: title plus a placeholder
fn draw_instrument(
    ctx: &FrameContext,
    surface: &mut dyn Surface,
    instrument: &Instrument,
    title: &str,
) {
    let region = ctx.tab_region();
    let bands = RowBands::new(region.y, ctx.row_height(), 1);
    let title_band = region.slice(bands.header(0));
    surface.draw_text(title, title_band.center(), FontRole::Title, ctx.palette.text);

    let body_top = bands.data_top();
    let body = Rect::new(
        region.x,
        body_top,
        region.width,
        (region.bottom() - body_top).max(0.0),
    );
    surface.draw_text(
        UNDER_CONSTRUCTION,
        body.center(),
        FontRole::Cell,
        ctx.palette.text,
    );
    tracing::trace!("Instrument {:02X} placeholder drawn", instrument.name);
}
