//! Song, chain, phrase and instrument data shown by the tabs

use serde::{Deserialize, Serialize};

use super::Note;

/// Rows in a freshly created phrase or chain
pub const DEFAULT_ROWS: usize = 16;

/// A per-row effect attached to a phrase row.
///
/// In YAML the variant is a tag: `!volume 0.5` or `!other {code: A, arg: 3}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    /// Set channel volume, normalized to `[0, 1]`
    Volume(f32),
    /// A stored command with no display form yet
    Other { code: char, arg: Option<u32> },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PhraseRow {
    pub note: Option<Note>,
    pub instrument: Option<u8>,
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    pub name: u8,
    pub rows: Vec<PhraseRow>,
}

impl Phrase {
    pub fn new(name: u8) -> Self {
        Self {
            name,
            rows: vec![PhraseRow::default(); DEFAULT_ROWS],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainRow {
    pub phrase: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    pub name: u8,
    pub rows: Vec<ChainRow>,
}

impl Chain {
    pub fn new(name: u8) -> Self {
        Self {
            name,
            rows: vec![ChainRow::default(); DEFAULT_ROWS],
        }
    }
}

/// One song row: a chain id per channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRow {
    pub lead_1: Option<u8>,
    pub lead_2: Option<u8>,
    pub bass: Option<u8>,
    pub perc: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub rows: Vec<SongRow>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub name: u8,
}
