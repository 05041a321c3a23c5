//! Right-hand sidebar: tempo, now-playing notes, oscilloscope and menu map
//!
//! Bands are stacked top to bottom. Each draw routine takes the top edge of
//! its band and returns the bottom edge, which the next band starts from.

use super::geometry::{stacked_band, ColumnBands, Rect};
use super::surface::{FontRole, Surface};
use super::FrameContext;
use crate::model::{Bpm, Note, ScreenKind, TrackerState, N_CHANNELS};

/// Horizontal gap between neighbouring now-playing boxes
pub const NOTE_BOX_MARGIN: f32 = 5.0;

/// Inset of the highlight behind the active menu entry
pub const MENU_ENTRY_INSET: f32 = 5.0;

/// Draw every sidebar band, returning the bottom of the last one
pub fn draw_sidebar(ctx: &FrameContext, surface: &mut dyn Surface, state: &TrackerState) -> f32 {
    let top = ctx.sidebar_region().y;
    let top = draw_tempo(ctx, surface, top, state.tempo);
    let top = draw_notes(ctx, surface, top, &state.playing);
    let top = draw_oscilloscope(ctx, surface, top);
    draw_menu_map(ctx, surface, top, state.screen.kind())
}

pub fn draw_tempo(ctx: &FrameContext, surface: &mut dyn Surface, top: f32, tempo: Bpm) -> f32 {
    let panel = ctx.sidebar_region();
    let band = stacked_band(top, ctx.ui.menu.tempo, ctx.viewport.height);

    surface.draw_text(
        &format!("TEMPO: {:>3}", tempo),
        panel.slice(band).center(),
        FontRole::Title,
        ctx.palette.text,
    );
    band.bottom
}

/// One column per channel; sounding channels get a filled box behind the note
pub fn draw_notes(
    ctx: &FrameContext,
    surface: &mut dyn Surface,
    top: f32,
    playing: &[Option<Note>; N_CHANNELS],
) -> f32 {
    let panel = ctx.sidebar_region();
    let band = stacked_band(top, ctx.ui.menu.note_display, ctx.viewport.height);
    let Some(columns) = ColumnBands::split(panel.x, panel.width, N_CHANNELS) else {
        return band.bottom;
    };

    let box_size = (
        (columns.width() - NOTE_BOX_MARGIN).max(0.0),
        ctx.row_height().min(band.height()),
    );
    for (channel, note) in playing.iter().enumerate() {
        let center = (columns.center(channel), band.middle());
        let color = match note {
            Some(_) => {
                surface.fill_rect(Rect::from_center(center, box_size), ctx.palette.note_held);
                ctx.palette.text_alt
            }
            None => ctx.palette.text,
        };
        surface.draw_text(&ctx.notes.name(*note), center, FontRole::Cell, color);
    }
    band.bottom
}

/// Reserves the oscilloscope band; there is no waveform to show yet
pub fn draw_oscilloscope(ctx: &FrameContext, _surface: &mut dyn Surface, top: f32) -> f32 {
    let band = stacked_band(top, ctx.ui.menu.osciloscope, ctx.viewport.height);
    tracing::debug!(
        "Oscilloscope not implemented, reserving {:.1}..{:.1}",
        band.top,
        band.bottom
    );
    band.bottom
}

/// Screen labels stacked vertically, the active one on a highlight
pub fn draw_menu_map(
    ctx: &FrameContext,
    surface: &mut dyn Surface,
    top: f32,
    active: ScreenKind,
) -> f32 {
    let panel = ctx.sidebar_region();
    let band = stacked_band(top, ctx.ui.menu.menu_map, ctx.viewport.height);
    let entry_height = band.height() / ScreenKind::ALL.len() as f32;

    for (i, kind) in ScreenKind::ALL.iter().enumerate() {
        let entry = Rect::new(
            panel.x,
            band.top + entry_height * i as f32,
            panel.width,
            entry_height,
        );
        if *kind == active {
            surface.fill_rect(entry.shrink(MENU_ENTRY_INSET), ctx.palette.highlight);
        }
        surface.draw_text(kind.label(), entry.center(), FontRole::Title, ctx.palette.text);
    }
    band.bottom
}
