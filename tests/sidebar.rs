//! Sidebar tests: band stacking and per-band content

mod common;

use common::{approx_eq, assert_rect_eq, rects_colored, Fixture};
use tracker_ui::model::{ScreenKind, TrackerState};
use tracker_ui::view::sidebar::{
    draw_menu_map, draw_notes, draw_oscilloscope, draw_sidebar, draw_tempo, MENU_ENTRY_INSET,
    NOTE_BOX_MARGIN,
};
use tracker_ui::view::{DrawList, Rect};

#[test]
fn test_bands_chain_bottom_to_top() {
    let fixture = Fixture::standard();
    let ctx = fixture.ctx();
    let mut list = DrawList::new();

    let tempo_bottom = draw_tempo(&ctx, &mut list, 0.0, 120);
    let notes_bottom = draw_notes(&ctx, &mut list, tempo_bottom, &[None; 4]);
    let scope_bottom = draw_oscilloscope(&ctx, &mut list, notes_bottom);
    let map_bottom = draw_menu_map(&ctx, &mut list, scope_bottom, ScreenKind::Song);

    assert!(approx_eq(tempo_bottom, 100.0));
    assert!(approx_eq(notes_bottom, 200.0));
    assert!(approx_eq(scope_bottom, 400.0));
    assert!(approx_eq(map_bottom, 600.0));
}

#[test]
fn test_draw_sidebar_returns_last_bottom() {
    let fixture = Fixture::standard();
    let state = TrackerState::demo(ScreenKind::Song);
    let mut list = DrawList::new();
    let bottom = draw_sidebar(&fixture.ctx(), &mut list, &state);
    assert!(approx_eq(bottom, 600.0));
}

#[test]
fn test_tempo_is_fixed_width() {
    let fixture = Fixture::standard();
    let mut list = DrawList::new();
    draw_tempo(&fixture.ctx(), &mut list, 0.0, 90);

    let (text, center, _) = list.texts().next().unwrap();
    assert_eq!(text, "TEMPO:  90");
    assert!(approx_eq(center.0, 700.0));
    assert!(approx_eq(center.1, 50.0));
}

#[test]
fn test_now_playing_boxes() {
    let fixture = Fixture::standard();
    let mut list = DrawList::new();
    draw_notes(
        &fixture.ctx(),
        &mut list,
        100.0,
        &[Some(60), None, Some(36), Some(42)],
    );

    let names: Vec<_> = list.texts().map(|(t, _, _)| t.to_string()).collect();
    assert_eq!(names, ["C-5", "---", "C-3", "F#3"]);

    let rects: Vec<_> = list.rects().collect();
    let held = rects_colored(&rects, fixture.palette.note_held);
    assert_eq!(held.len(), 3);
    // 200px sidebar split into four 50px channels
    assert!(approx_eq(held[0].center().0, 625.0));
    assert!(approx_eq(held[1].center().0, 725.0));
    assert!(approx_eq(held[2].center().1, 150.0));
    assert!(approx_eq(held[0].width, 50.0 - NOTE_BOX_MARGIN));
}

#[test]
fn test_oscilloscope_reserves_band_without_drawing() {
    let fixture = Fixture::standard();
    let mut list = DrawList::new();
    let bottom = draw_oscilloscope(&fixture.ctx(), &mut list, 200.0);
    assert!(list.is_empty());
    assert!(approx_eq(bottom, 400.0));
}

#[test]
fn test_menu_map_highlights_active_screen() {
    let fixture = Fixture::standard();
    let mut list = DrawList::new();
    draw_menu_map(&fixture.ctx(), &mut list, 400.0, ScreenKind::Phrase);

    let labels: Vec<_> = list.texts().map(|(t, _, _)| t.to_string()).collect();
    assert_eq!(labels, ["SONG", "CHAIN", "PHRASE", "INST"]);

    let rects: Vec<_> = list.rects().collect();
    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0].1, fixture.palette.highlight);
    // Third of four 50px entries starting at y=400
    assert_rect_eq(rects[0].0, Rect::new(600.0, 500.0, 200.0, 50.0).shrink(MENU_ENTRY_INSET));
}

#[test]
fn test_zero_height_bands_still_chain() {
    let mut fixture = Fixture::standard();
    fixture.ui.menu.tempo = 0.0;
    fixture.ui.menu.note_display = 0.0;
    let ctx = fixture.ctx();
    let mut list = DrawList::new();

    let tempo_bottom = draw_tempo(&ctx, &mut list, 0.0, 120);
    let notes_bottom = draw_notes(&ctx, &mut list, tempo_bottom, &[Some(60); 4]);
    assert_eq!(tempo_bottom, 0.0);
    assert_eq!(notes_bottom, 0.0);
}
