//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use tracker_ui::config::UiConfig;
use tracker_ui::format::TrackerNoteNames;
use tracker_ui::model::{Phrase, PhraseRow};
use tracker_ui::theme::{Color, Palette};
use tracker_ui::view::{FrameContext, Rect, Viewport};

/// Everything a [`FrameContext`] borrows, owned by the test
pub struct Fixture {
    pub viewport: Viewport,
    pub ui: UiConfig,
    pub palette: Palette,
    pub notes: TrackerNoteNames,
}

impl Fixture {
    /// 800×600 window, tab 3/4 of the width, rows 1/20 of the height
    pub fn standard() -> Self {
        let mut ui = UiConfig::default();
        ui.tab.width = 0.75;
        ui.tab.row_height = 0.05;
        ui.menu.width = 0.25;
        Self::with_ui(Viewport::new(800.0, 600.0), ui)
    }

    pub fn with_ui(viewport: Viewport, ui: UiConfig) -> Self {
        Self {
            viewport,
            ui,
            palette: Palette::catppuccin_mocha(),
            notes: TrackerNoteNames,
        }
    }

    pub fn ctx(&self) -> FrameContext<'_> {
        FrameContext::new(self.viewport, &self.ui, &self.palette, &self.notes)
    }
}

/// A phrase of `len` empty rows
pub fn phrase_with_rows(len: usize) -> Phrase {
    Phrase {
        name: 0x01,
        rows: vec![PhraseRow::default(); len],
    }
}

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[track_caller]
pub fn assert_rect_eq(actual: Rect, expected: Rect) {
    assert!(
        approx_eq(actual.x, expected.x)
            && approx_eq(actual.y, expected.y)
            && approx_eq(actual.width, expected.width)
            && approx_eq(actual.height, expected.height),
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

/// Rectangles filled with `color`
pub fn rects_colored(rects: &[(Rect, Color)], color: Color) -> Vec<Rect> {
    rects
        .iter()
        .filter(|(_, c)| *c == color)
        .map(|(r, _)| *r)
        .collect()
}
