//! Layout and font configuration persistence
//!
//! Stores user preferences in `~/.config/tracker-ui/config.yaml`. All layout
//! values are fractions of the viewport so the UI scales with the window.

use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

/// Slack allowed when checking that stacked fractions fit their parent
const FRACTION_EPSILON: f32 = 1e-4;

/// Tracker UI configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackerConfig {
    /// Selected theme id (e.g., "catppuccin-mocha", "gameboy")
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub font: FontConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            font: FontConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

/// Font file and the two pixel sizes the UI uses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FontConfig {
    /// Path to a TrueType/OpenType font file, empty for the built-in font
    #[serde(default)]
    pub file_path: PathBuf,
    /// Tab titles, tempo and menu map
    #[serde(default = "default_title_size")]
    pub title_size: f32,
    /// Grid cells, column labels and now-playing notes
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
}

fn default_title_size() -> f32 {
    30.0
}

fn default_cell_size() -> f32 {
    24.0
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::new(),
            title_size: default_title_size(),
            cell_size: default_cell_size(),
        }
    }
}

/// Proportional layout of the screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct UiConfig {
    #[serde(default)]
    pub tab: TabUiConf,
    #[serde(default)]
    pub menu: MenuUiConf,
}

/// Main tab area, anchored to the left edge
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TabUiConf {
    /// Fraction of the viewport width
    pub width: f32,
    /// Fraction of the viewport height
    pub height: f32,
    /// Fraction of the viewport height per row (title, labels and data rows)
    pub row_height: f32,
    /// Fixed column width as a fraction of the tab width.
    /// When unset the tab width is shared equally between columns.
    #[serde(default)]
    pub row_elm_width: Option<f32>,
}

impl Default for TabUiConf {
    fn default() -> Self {
        Self {
            width: 2.0 / 3.0,
            height: 1.0,
            row_height: 1.0 / 18.0,
            row_elm_width: None,
        }
    }
}

/// Sidebar anchored to the right edge. Band values are heights, stacked
/// top to bottom in declaration order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MenuUiConf {
    /// Fraction of the viewport width
    pub width: f32,
    pub tempo: f32,
    pub note_display: f32,
    pub osciloscope: f32,
    pub menu_map: f32,
}

impl Default for MenuUiConf {
    fn default() -> Self {
        Self {
            width: 1.0 / 3.125,
            tempo: 1.0 / 6.0,
            note_display: 1.0 / 6.0,
            osciloscope: 2.0 / 6.0,
            menu_map: 2.0 / 6.0,
        }
    }
}

impl MenuUiConf {
    /// Band heights in stacking order
    pub fn bands(&self) -> [(&'static str, f32); 4] {
        [
            ("menu.tempo", self.tempo),
            ("menu.note_display", self.note_display),
            ("menu.osciloscope", self.osciloscope),
            ("menu.menu_map", self.menu_map),
        ]
    }
}

impl UiConfig {
    /// Check every fraction lies in `[0, 1]` and stacked bands fit their parent
    pub fn validate(&self) -> Result<()> {
        let mut fractions = vec![
            ("tab.width", self.tab.width),
            ("tab.height", self.tab.height),
            ("tab.row_height", self.tab.row_height),
            ("menu.width", self.menu.width),
        ];
        if let Some(elm) = self.tab.row_elm_width {
            fractions.push(("tab.row_elm_width", elm));
        }
        fractions.extend(self.menu.bands());

        for (key, value) in &fractions {
            ensure!(
                (0.0..=1.0).contains(value),
                "{} must be within [0, 1], got {}",
                key,
                value
            );
        }

        let stacked: f32 = self.menu.bands().iter().map(|(_, v)| v).sum();
        ensure!(
            stacked <= 1.0 + FRACTION_EPSILON,
            "sidebar bands sum to {:.4}, which exceeds the sidebar height",
            stacked
        );

        // Tab is anchored left and the sidebar right
        ensure!(
            self.tab.width + self.menu.width <= 1.0 + FRACTION_EPSILON,
            "tab.width {} and menu.width {} overlap (sum exceeds 1)",
            self.tab.width,
            self.menu.width
        );

        // Title and column label bands must fit inside the tab
        ensure!(
            self.tab.row_height * 2.0 <= self.tab.height + FRACTION_EPSILON,
            "tab.row_height {} leaves no room for the header bands",
            self.tab.row_height
        );

        Ok(())
    }
}

impl TrackerConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: TrackerConfig =
            serde_yaml::from_str(yaml).context("Failed to parse tracker config")?;
        config.ui.validate().context("Invalid layout configuration")?;
        Ok(config)
    }

    /// Read a config file from an explicit path
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Config at {}", path.display()))
    }

    /// Load config from disk, or return defaults if not found or invalid
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Write config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Save config to the user config directory
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_valid() {
        assert!(UiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_menu_bands_fill_sidebar() {
        let total: f32 = MenuUiConf::default().bands().iter().map(|(_, v)| v).sum();
        assert!((total - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_fraction_out_of_range_is_rejected() {
        let mut ui = UiConfig::default();
        ui.tab.width = 1.5;
        let err = ui.validate().unwrap_err().to_string();
        assert!(err.contains("tab.width"), "unexpected error: {}", err);
    }

    #[test]
    fn test_overfull_sidebar_is_rejected() {
        let mut ui = UiConfig::default();
        ui.menu.menu_map = 0.9;
        assert!(ui.validate().is_err());
    }

    #[test]
    fn test_edge_fractions_are_accepted() {
        let mut ui = UiConfig::default();
        ui.tab.width = 1.0;
        ui.menu.width = 0.0;
        ui.menu.tempo = 0.0;
        assert!(ui.validate().is_ok());
    }
}
