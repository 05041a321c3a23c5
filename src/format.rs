//! Cell text formatting
//!
//! Converts row values into fixed-width strings, one policy per column kind.
//! Every string produced for a given kind has the same character count, so
//! centered text stays put while values change underneath it.

use crate::model::{Command, Note};

/// Placeholder for an empty instrument, chain or phrase id
pub const EMPTY_ID: &str = "--";
/// Placeholder for a row without a command
pub const EMPTY_COMMAND: &str = "---";
/// Shown for a command variant that has no display form
pub const UNHANDLED_COMMAND: &str = "ERR";

/// Highest note [`TrackerNoteNames`] can name
pub const MAX_MIDI_NOTE: Note = 127;

/// Shown for a note above [`MAX_MIDI_NOTE`]
pub const OUT_OF_RANGE_NOTE: &str = "???";
/// Row index width for grids of up to 256 rows
pub const MIN_INDEX_DIGITS: usize = 2;

/// Hex digits in the volume command argument
const VOLUME_STEPS: f32 = 15.0;

const NOTE_NAMES: [&str; 12] = [
    "C-", "C#", "D-", "D#", "E-", "F-", "F#", "G-", "G#", "A-", "A#", "B-",
];

/// How a grid column renders its values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Row ordinal, always grid column 0
    Index,
    Note,
    /// Instrument, chain or phrase id
    Instrument,
    Command,
    /// Preformatted text drawn as-is
    Raw,
}

/// A labelled grid column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    pub const fn new(label: &'static str, kind: ColumnKind) -> Self {
        Self { label, kind }
    }

    /// The unlabelled row index column
    pub const fn index() -> Self {
        Self::new("", ColumnKind::Index)
    }
}

/// One value to be shown in a grid cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Index(usize),
    Note(Option<Note>),
    Id(Option<u8>),
    Command(Option<Command>),
    Raw(String),
}

impl CellValue {
    /// The column kind this value belongs in
    pub fn kind(&self) -> ColumnKind {
        match self {
            CellValue::Index(_) => ColumnKind::Index,
            CellValue::Note(_) => ColumnKind::Note,
            CellValue::Id(_) => ColumnKind::Instrument,
            CellValue::Command(_) => ColumnKind::Command,
            CellValue::Raw(_) => ColumnKind::Raw,
        }
    }
}

/// Turns a note into its display name
pub trait NoteNamer {
    /// Display string for `note`; None renders the empty representation.
    /// Implementations must return the same width for every input.
    fn name(&self, note: Option<Note>) -> String;
}

/// Classic tracker note names: `C-5`, `F#3`, `---` for no note.
///
/// The octave is `note / 12` written as one hex digit, so MIDI 120..=127
/// show octave `A`. Values past the MIDI range render as [`OUT_OF_RANGE_NOTE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackerNoteNames;

impl NoteNamer for TrackerNoteNames {
    fn name(&self, note: Option<Note>) -> String {
        match note {
            Some(n) if n > MAX_MIDI_NOTE => {
                tracing::warn!("note {} is outside the MIDI range", n);
                OUT_OF_RANGE_NOTE.to_string()
            }
            Some(n) => format!("{}{:X}", NOTE_NAMES[(n % 12) as usize], n / 12),
            None => "---".to_string(),
        }
    }
}

/// Hex digits needed to index `row_count` rows, never fewer than two
pub fn index_digits(row_count: usize) -> usize {
    let mut digits = 1;
    let mut max = row_count.saturating_sub(1) >> 4;
    while max > 0 {
        digits += 1;
        max >>= 4;
    }
    digits.max(MIN_INDEX_DIGITS)
}

/// Zero-padded uppercase hex row ordinal
pub fn format_index(row: usize, digits: usize) -> String {
    format!("{:0width$X}", row, width = digits)
}

/// Two-digit hex id, or `--`
pub fn format_id(id: Option<u8>) -> String {
    match id {
        Some(id) => format!("{:02X}", id),
        None => EMPTY_ID.to_string(),
    }
}

/// Quantize a normalized amplitude to one hex digit.
///
/// Rounds half away from zero, so 0.5 maps to 8. Out-of-range and NaN
/// inputs clamp to `[0, 15]`.
pub fn volume_digit(amplitude: f32) -> u8 {
    let scaled = (amplitude * VOLUME_STEPS).round();
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(0.0, VOLUME_STEPS) as u8
}

/// Three-character command text: `---`, `V-x`, or the unhandled placeholder
pub fn format_command(command: Option<&Command>) -> String {
    match command {
        None => EMPTY_COMMAND.to_string(),
        Some(Command::Volume(amplitude)) => format!("V-{:X}", volume_digit(*amplitude)),
        Some(Command::Other { code, arg }) => {
            tracing::warn!(
                "No display form for command {:?} (arg {:?}), showing {}",
                code,
                arg,
                UNHANDLED_COMMAND
            );
            UNHANDLED_COMMAND.to_string()
        }
    }
}

/// Formats every cell of one grid
pub struct CellFormatter<'a> {
    notes: &'a dyn NoteNamer,
    index_digits: usize,
}

impl<'a> CellFormatter<'a> {
    /// Formatter for a grid of `row_count` rows
    pub fn new(notes: &'a dyn NoteNamer, row_count: usize) -> Self {
        Self {
            notes,
            index_digits: index_digits(row_count),
        }
    }

    /// Fixed character width of `kind`, None for raw text
    pub fn width(&self, kind: ColumnKind) -> Option<usize> {
        match kind {
            ColumnKind::Index => Some(self.index_digits),
            ColumnKind::Note => Some(3),
            ColumnKind::Instrument => Some(EMPTY_ID.len()),
            ColumnKind::Command => Some(EMPTY_COMMAND.len()),
            ColumnKind::Raw => None,
        }
    }

    /// Display text for `value` in a column of `kind`.
    ///
    /// A value that does not belong in the column renders as `?` characters
    /// of the column's width.
    pub fn format(&self, kind: ColumnKind, value: &CellValue) -> String {
        match (kind, value) {
            (ColumnKind::Index, CellValue::Index(row)) => format_index(*row, self.index_digits),
            (ColumnKind::Note, CellValue::Note(note)) => self.notes.name(*note),
            (ColumnKind::Instrument, CellValue::Id(id)) => format_id(*id),
            (ColumnKind::Command, CellValue::Command(command)) => format_command(command.as_ref()),
            (ColumnKind::Raw, CellValue::Raw(text)) => text.clone(),
            (kind, value) => {
                tracing::warn!("{:?} value in a {:?} column", value.kind(), kind);
                "?".repeat(self.width(kind).unwrap_or(1))
            }
        }
    }
}
