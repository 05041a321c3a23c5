//! Sample tracker state for previews, screenshots and benchmarks

use super::song::{Chain, ChainRow, Command, Instrument, Phrase, PhraseRow, Song, SongRow};
use super::{Screen, ScreenKind, TrackerState};

/// Rows in the demo song
const SONG_ROWS: usize = 32;

/// A C minor arpeggio with a few volume changes
pub fn phrase() -> Phrase {
    const ARP: [u8; 4] = [60, 63, 67, 72];

    let mut phrase = Phrase::new(0x01);
    for (i, row) in phrase.rows.iter_mut().enumerate() {
        if i % 2 == 1 {
            continue;
        }
        *row = PhraseRow {
            note: Some(ARP[(i / 2) % ARP.len()]),
            instrument: Some(0x01),
            command: match i {
                0 => Some(Command::Volume(1.0)),
                8 => Some(Command::Volume(0.5)),
                _ => None,
            },
        };
    }
    phrase
}

/// Four phrases followed by empty rows
pub fn chain() -> Chain {
    let mut chain = Chain::new(0x00);
    for (i, row) in chain.rows.iter_mut().take(4).enumerate() {
        *row = ChainRow {
            phrase: Some(i as u8),
        };
    }
    chain
}

/// Lead and bass running the whole song, percussion every other row
pub fn song() -> Song {
    Song {
        rows: (0..SONG_ROWS)
            .map(|i| SongRow {
                lead_1: Some(0x00),
                lead_2: (i >= 4).then_some(0x01),
                bass: Some(0x02),
                perc: (i % 2 == 0).then_some(0x03),
            })
            .collect(),
    }
}

impl TrackerState {
    /// A populated state showing `kind`
    pub fn demo(kind: ScreenKind) -> Self {
        let screen = match kind {
            ScreenKind::Song => Screen::Song(song()),
            ScreenKind::Chain => Screen::Chain(chain()),
            ScreenKind::Phrase => Screen::Phrase(phrase()),
            ScreenKind::Instrument => Screen::Instrument(Instrument { name: 0x01 }),
        };

        let mut state = TrackerState::new(screen);
        state.playing = [Some(60), None, Some(36), Some(42)];
        state
    }
}
