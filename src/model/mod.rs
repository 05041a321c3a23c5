//! Tracker state as seen by the renderer
//!
//! The sequencer and editing logic own and mutate these values; the view only
//! reads a snapshot of them once per frame.

pub mod demo;
pub mod song;

pub use song::{Chain, ChainRow, Command, Instrument, Phrase, PhraseRow, Song, SongRow};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A MIDI note number
pub type Note = u8;
/// Beats per minute
pub type Bpm = u8;
/// Number of playback channels (lead 1, lead 2, bass, percussion)
pub const N_CHANNELS: usize = 4;

/// The editing cursor as displayed on the active grid.
///
/// `col` counts data columns only: column 0 is the first column after the
/// row index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayCursor {
    pub row: usize,
    pub col: usize,
    /// Selected cells are filled; hovered cells get an outline
    #[serde(default)]
    pub selected: bool,
}

impl DisplayCursor {
    pub fn new(row: usize, col: usize, selected: bool) -> Self {
        Self { row, col, selected }
    }

    /// True if the cursor sits on the data cell at (`row`, `col`)
    pub fn is_at(&self, row: usize, col: usize) -> bool {
        self.row == row && self.col == col
    }

    /// Cursor moved by (`d_row`, `d_col`), clamped to a `rows` × `cols` grid
    pub fn moved(&self, d_row: isize, d_col: isize, rows: usize, cols: usize) -> Self {
        let step = |value: usize, delta: isize, len: usize| {
            value
                .saturating_add_signed(delta)
                .min(len.saturating_sub(1))
        };
        Self {
            row: step(self.row, d_row, rows),
            col: step(self.col, d_col, cols),
            selected: self.selected,
        }
    }
}

/// Which tab is on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenKind {
    #[default]
    Song,
    Chain,
    Phrase,
    Instrument,
}

impl ScreenKind {
    /// Every screen in menu map order
    pub const ALL: [ScreenKind; 4] = [
        ScreenKind::Song,
        ScreenKind::Chain,
        ScreenKind::Phrase,
        ScreenKind::Instrument,
    ];

    /// Short label shown in the menu map
    pub fn label(&self) -> &'static str {
        match self {
            ScreenKind::Song => "SONG",
            ScreenKind::Chain => "CHAIN",
            ScreenKind::Phrase => "PHRASE",
            ScreenKind::Instrument => "INST",
        }
    }

    /// The following screen, wrapping around
    pub fn next(&self) -> Self {
        match self {
            ScreenKind::Song => ScreenKind::Chain,
            ScreenKind::Chain => ScreenKind::Phrase,
            ScreenKind::Phrase => ScreenKind::Instrument,
            ScreenKind::Instrument => ScreenKind::Song,
        }
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScreenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "song" => Ok(ScreenKind::Song),
            "chain" => Ok(ScreenKind::Chain),
            "phrase" => Ok(ScreenKind::Phrase),
            "instrument" | "inst" => Ok(ScreenKind::Instrument),
            other => Err(format!(
                "unknown screen '{}', expected song, chain, phrase or instrument",
                other
            )),
        }
    }
}

/// The screen being edited along with the data it shows.
///
/// In YAML the kind is a tag, e.g. `!phrase {name: 1, rows: [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Song(Song),
    Chain(Chain),
    Phrase(Phrase),
    Instrument(Instrument),
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Song(_) => ScreenKind::Song,
            Screen::Chain(_) => ScreenKind::Chain,
            Screen::Phrase(_) => ScreenKind::Phrase,
            Screen::Instrument(_) => ScreenKind::Instrument,
        }
    }

    /// Rows in the screen's grid, 0 for screens without one
    pub fn row_count(&self) -> usize {
        match self {
            Screen::Song(song) => song.rows.len(),
            Screen::Chain(chain) => chain.rows.len(),
            Screen::Phrase(phrase) => phrase.rows.len(),
            Screen::Instrument(_) => 0,
        }
    }
}

/// Per-frame snapshot read by the view
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerState {
    pub screen: Screen,
    pub display_cursor: DisplayCursor,
    pub tempo: Bpm,
    /// Note currently sounding on each channel
    pub playing: [Option<Note>; N_CHANNELS],
}

impl TrackerState {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            display_cursor: DisplayCursor::default(),
            tempo: 120,
            playing: [None; N_CHANNELS],
        }
    }
}
