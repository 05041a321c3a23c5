//! Cell formatter tests: fixed widths, hex ids and command display

use tracker_ui::format::{
    format_command, format_id, format_index, index_digits, volume_digit, CellFormatter, CellValue,
    ColumnKind, NoteNamer, TrackerNoteNames, OUT_OF_RANGE_NOTE, UNHANDLED_COMMAND,
};
use tracker_ui::model::Command;

// ============================================================================
// Index column
// ============================================================================

#[test]
fn test_index_round_trips_through_hex() {
    let formatter = CellFormatter::new(&TrackerNoteNames, 256);
    for n in 0..=255usize {
        let text = formatter.format(ColumnKind::Index, &CellValue::Index(n));
        assert_eq!(text.len(), 2, "index {} rendered as {:?}", n, text);
        assert_eq!(usize::from_str_radix(&text, 16).unwrap(), n);
        assert_eq!(text, text.to_uppercase());
    }
}

#[test]
fn test_index_widens_for_large_grids() {
    assert_eq!(index_digits(300), 3);
    let formatter = CellFormatter::new(&TrackerNoteNames, 300);
    assert_eq!(formatter.format(ColumnKind::Index, &CellValue::Index(5)), "005");
    assert_eq!(formatter.format(ColumnKind::Index, &CellValue::Index(299)), "12B");
    assert_eq!(formatter.width(ColumnKind::Index), Some(3));
}

#[test]
fn test_index_examples() {
    assert_eq!(format_index(0, 2), "00");
    assert_eq!(format_index(255, 2), "FF");
}

// ============================================================================
// Ids and notes
// ============================================================================

#[test]
fn test_id_width_is_constant() {
    let widths: Vec<_> = (0..=255u8)
        .map(|id| format_id(Some(id)).len())
        .chain(std::iter::once(format_id(None).len()))
        .collect();
    assert!(widths.iter().all(|w| *w == 2));
    assert_eq!(format_id(None), "--");
    assert_eq!(format_id(Some(0xAB)), "AB");
}

#[test]
fn test_note_width_is_constant() {
    let names = TrackerNoteNames;
    for note in 0..=255u8 {
        assert_eq!(names.name(Some(note)).chars().count(), 3, "note {}", note);
    }
    assert_eq!(names.name(None), "---");
}

#[test]
fn test_notes_past_midi_range_use_placeholder() {
    let formatter = CellFormatter::new(&TrackerNoteNames, 16);
    assert_eq!(formatter.format(ColumnKind::Note, &CellValue::Note(Some(127))), "G-A");
    for note in [128u8, 192, 255] {
        assert_eq!(
            formatter.format(ColumnKind::Note, &CellValue::Note(Some(note))),
            OUT_OF_RANGE_NOTE,
            "note {}",
            note
        );
    }
}

#[test]
fn test_note_column_delegates_to_namer() {
    struct Solfege;
    impl NoteNamer for Solfege {
        fn name(&self, note: Option<u8>) -> String {
            match note {
                Some(_) => "do".to_string(),
                None => "..".to_string(),
            }
        }
    }

    let formatter = CellFormatter::new(&Solfege, 16);
    assert_eq!(formatter.format(ColumnKind::Note, &CellValue::Note(Some(60))), "do");
    assert_eq!(formatter.format(ColumnKind::Note, &CellValue::Note(None)), "..");
}

// ============================================================================
// Commands
// ============================================================================

#[test]
fn test_volume_quantization() {
    assert_eq!(format_command(Some(&Command::Volume(0.0))), "V-0");
    assert_eq!(format_command(Some(&Command::Volume(1.0))), "V-F");
    // Half rounds away from zero
    assert_eq!(format_command(Some(&Command::Volume(0.5))), "V-8");
}

#[test]
fn test_volume_clamps_out_of_range() {
    assert_eq!(volume_digit(-0.3), 0);
    assert_eq!(volume_digit(1.7), 15);
    assert_eq!(volume_digit(f32::NAN), 0);
}

#[test]
fn test_absent_command() {
    assert_eq!(format_command(None), "---");
}

#[test]
fn test_unhandled_command_renders_placeholder() {
    let command = Command::Other {
        code: 'P',
        arg: Some(0x20),
    };
    let text = format_command(Some(&command));
    assert_eq!(text, UNHANDLED_COMMAND);
    assert!(!text.is_empty());
}

#[test]
fn test_command_width_is_constant() {
    let commands = [
        None,
        Some(Command::Volume(0.0)),
        Some(Command::Volume(0.33)),
        Some(Command::Volume(1.0)),
        Some(Command::Other { code: 'X', arg: None }),
    ];
    let formatter = CellFormatter::new(&TrackerNoteNames, 16);
    for command in commands {
        let text = formatter.format(ColumnKind::Command, &CellValue::Command(command));
        assert_eq!(text.len(), 3, "{:?} rendered as {:?}", command, text);
    }
}

// ============================================================================
// Formatter dispatch
// ============================================================================

#[test]
fn test_raw_text_passes_through() {
    let formatter = CellFormatter::new(&TrackerNoteNames, 16);
    let value = CellValue::Raw("hello".to_string());
    assert_eq!(formatter.format(ColumnKind::Raw, &value), "hello");
    assert_eq!(formatter.width(ColumnKind::Raw), None);
}

#[test]
fn test_mismatched_value_keeps_column_width() {
    let formatter = CellFormatter::new(&TrackerNoteNames, 16);
    assert_eq!(formatter.format(ColumnKind::Instrument, &CellValue::Index(3)), "??");
    assert_eq!(formatter.format(ColumnKind::Note, &CellValue::Id(None)), "???");
}
