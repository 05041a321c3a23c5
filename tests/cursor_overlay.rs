//! Cursor overlay tests: exclusivity, fill vs outline and draw order

mod common;

use common::{assert_rect_eq, phrase_with_rows, rects_colored, Fixture};
use tracker_ui::model::{DisplayCursor, Screen, Song, SongRow};
use tracker_ui::view::cursor::{highlight, Overlay, CURSOR_INSET};
use tracker_ui::view::tabs::draw_tab;
use tracker_ui::view::{DrawCmd, DrawList, Rect};

fn draw_phrase(fixture: &Fixture, rows: usize, cursor: DisplayCursor) -> DrawList {
    let mut list = DrawList::new();
    draw_tab(
        &fixture.ctx(),
        &mut list,
        &Screen::Phrase(phrase_with_rows(rows)),
        &cursor,
    );
    list
}

#[test]
fn test_exactly_one_cell_highlighted() {
    let fixture = Fixture::standard();
    for row in 0..16 {
        for col in 0..3 {
            for selected in [false, true] {
                let list = draw_phrase(&fixture, 16, DisplayCursor::new(row, col, selected));
                let rects: Vec<_> = list.rects().collect();
                let cursor_rects = rects_colored(&rects, fixture.palette.cursor);
                assert_eq!(cursor_rects.len(), 1, "cursor ({}, {})", row, col);
                assert_eq!(rects.len(), if selected { 1 } else { 2 });
            }
        }
    }
}

#[test]
fn test_selected_cell_is_filled() {
    let fixture = Fixture::standard();
    let list = draw_phrase(&fixture, 16, DisplayCursor::new(3, 1, true));
    let rects: Vec<_> = list.rects().collect();

    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0].1, fixture.palette.cursor);
    assert_rect_eq(rects[0].0, Rect::new(300.0, 150.0, 150.0, 30.0));
}

#[test]
fn test_hovered_cell_is_outlined() {
    let fixture = Fixture::standard();
    let list = draw_phrase(&fixture, 16, DisplayCursor::new(3, 1, false));
    let rects: Vec<_> = list.rects().collect();

    assert_eq!(rects.len(), 2);
    let (outer, outer_color) = rects[0];
    let (inner, inner_color) = rects[1];
    assert_eq!(outer_color, fixture.palette.cursor);
    assert_eq!(inner_color, fixture.palette.background);
    assert!(inner.width < outer.width && inner.height < outer.height);
    assert!(outer.encloses(&inner));
    assert_eq!(inner.center(), outer.center());
    assert!((outer.width - inner.width - CURSOR_INSET).abs() < 1e-3);
}

#[test]
fn test_text_drawn_after_overlay() {
    let fixture = Fixture::standard();
    let list = draw_phrase(&fixture, 16, DisplayCursor::new(3, 1, false));
    let cell_center = Rect::new(300.0, 150.0, 150.0, 30.0).center();

    let commands = list.commands();
    let last_rect = commands
        .iter()
        .rposition(|cmd| matches!(cmd, DrawCmd::Rect { .. }))
        .unwrap();
    let cell_text = commands
        .iter()
        .position(|cmd| matches!(cmd, DrawCmd::Text { center, .. } if *center == cell_center))
        .unwrap();
    assert!(cell_text > last_rect);
}

#[test]
fn test_selected_text_uses_contrasting_color() {
    let fixture = Fixture::standard();
    let list = draw_phrase(&fixture, 16, DisplayCursor::new(3, 1, true));
    let cell_center = Rect::new(300.0, 150.0, 150.0, 30.0).center();

    let (_, _, color) = list
        .texts()
        .find(|(_, center, _)| *center == cell_center)
        .unwrap();
    assert_eq!(color, fixture.palette.text_alt);
}

#[test]
fn test_cursor_outside_grid_draws_no_overlay() {
    let fixture = Fixture::standard();
    for cursor in [
        DisplayCursor::new(40, 0, false),
        DisplayCursor::new(0, 3, true),
        DisplayCursor::new(0, 99, false),
    ] {
        let list = draw_phrase(&fixture, 16, cursor);
        assert_eq!(list.rects().count(), 0, "{:?}", cursor);
    }
}

#[test]
fn test_index_column_never_highlighted() {
    let fixture = Fixture::standard();
    let list = draw_phrase(&fixture, 16, DisplayCursor::new(0, 0, true));
    let rects: Vec<_> = list.rects().collect();
    assert_eq!(rects.len(), 1);
    // Data column 0 is grid column 1
    assert_rect_eq(rects[0].0, Rect::new(150.0, 60.0, 150.0, 30.0));
}

#[test]
fn test_overlay_on_later_page() {
    let fixture = Fixture::standard();
    let song = Song {
        rows: vec![SongRow::default(); 40],
    };
    let mut list = DrawList::new();
    draw_tab(
        &fixture.ctx(),
        &mut list,
        &Screen::Song(song),
        &DisplayCursor::new(20, 3, true),
    );

    let rects: Vec<_> = list.rects().collect();
    assert_eq!(rects.len(), 1);
    // 800×600 song tab: 5 columns of 120, page starts at row 18
    assert_rect_eq(rects[0].0, Rect::new(480.0, 120.0, 120.0, 30.0));
}

#[test]
fn test_highlight_matches_overlay_fills() {
    let fixture = Fixture::standard();
    let cell = Rect::new(0.0, 0.0, 40.0, 20.0);
    let cursor = DisplayCursor::new(1, 1, false);
    let overlay = Overlay::for_cell(1, 1, &cursor, cell).unwrap();
    let expected: Vec<_> = overlay
        .fills(&fixture.palette)
        .into_iter()
        .map(|(rect, color)| DrawCmd::Rect { rect, color })
        .collect();
    assert_eq!(highlight(1, 1, &cursor, cell, &fixture.palette), expected);
}
