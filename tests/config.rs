//! Configuration system tests
//!
//! Tests for config paths, YAML parsing, validation and persistence.

use tempfile::tempdir;
use tracker_ui::config::{TrackerConfig, UiConfig};
use tracker_ui::config_paths;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("tracker-ui"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_themes_and_logs_are_subdirs_of_config() {
    let config = config_paths::config_dir().unwrap();
    assert!(config_paths::themes_dir().unwrap().starts_with(&config));
    assert!(config_paths::logs_dir().unwrap().starts_with(&config));
}

// ========================================================================
// Parsing
// ========================================================================

#[test]
fn test_empty_document_uses_defaults() {
    let config = TrackerConfig::from_yaml("{}").unwrap();
    assert_eq!(config, TrackerConfig::default());
}

#[test]
fn test_partial_document_keeps_other_defaults() {
    let yaml = r#"
theme: gameboy
font:
  cell_size: 18
"#;
    let config = TrackerConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.theme, "gameboy");
    assert_eq!(config.font.cell_size, 18.0);
    assert_eq!(config.font.title_size, 30.0);
    assert_eq!(config.ui, UiConfig::default());
}

#[test]
fn test_layout_fractions_parse() {
    let yaml = r#"
ui:
  tab:
    width: 0.75
    height: 1.0
    row_height: 0.05
    row_elm_width: 0.2
  menu:
    width: 0.25
    tempo: 0.1
    note_display: 0.2
    osciloscope: 0.3
    menu_map: 0.4
"#;
    let config = TrackerConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.ui.tab.width, 0.75);
    assert_eq!(config.ui.tab.row_elm_width, Some(0.2));
    assert_eq!(config.ui.menu.menu_map, 0.4);
}

#[test]
fn test_out_of_range_fraction_is_a_config_error() {
    let yaml = r#"
ui:
  tab:
    width: 1.25
    height: 1.0
    row_height: 0.05
"#;
    let err = TrackerConfig::from_yaml(yaml).unwrap_err();
    assert!(format!("{:#}", err).contains("tab.width"), "{:#}", err);
}

#[test]
fn test_overfull_sidebar_is_a_config_error() {
    let yaml = r#"
ui:
  menu:
    width: 0.3
    tempo: 0.5
    note_display: 0.5
    osciloscope: 0.5
    menu_map: 0.5
"#;
    let err = TrackerConfig::from_yaml(yaml).unwrap_err();
    assert!(format!("{:#}", err).contains("sidebar bands"), "{:#}", err);
}

#[test]
fn test_overlapping_tab_and_sidebar_is_a_config_error() {
    let yaml = r#"
ui:
  tab:
    width: 0.9
    height: 1.0
    row_height: 0.05
  menu:
    width: 0.5
    tempo: 0.1
    note_display: 0.2
    osciloscope: 0.3
    menu_map: 0.4
"#;
    let err = TrackerConfig::from_yaml(yaml).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("tab.width"), "{}", message);
    assert!(message.contains("menu.width"), "{}", message);
}

#[test]
fn test_tab_and_sidebar_may_fill_the_width() {
    let mut ui = UiConfig::default();
    ui.tab.width = 0.75;
    ui.menu.width = 0.25;
    assert!(ui.validate().is_ok());
}

#[test]
fn test_malformed_yaml_is_an_error() {
    assert!(TrackerConfig::from_yaml("ui: [not, a, map]").is_err());
}

// ========================================================================
// Persistence
// ========================================================================

#[test]
fn test_save_and_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let mut config = TrackerConfig::default();
    config.theme = "gameboy".to_string();
    config.ui.tab.row_elm_width = Some(0.2);
    config.save_to(&path).unwrap();

    let loaded = TrackerConfig::from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let err = TrackerConfig::from_file(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(err.to_string().contains("absent.yaml"));
}
