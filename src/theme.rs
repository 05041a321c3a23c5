//! Color themes for the tracker UI
//!
//! Provides YAML-based theming support with compile-time embedded themes
//! and user-defined themes from config directories.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/tracker-ui/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

// Embed theme YAML files at compile time
pub const CATPPUCCIN_MOCHA_YAML: &str = include_str!("../themes/catppuccin-mocha.yaml");
pub const GAMEBOY_YAML: &str = include_str!("../themes/gameboy.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "catppuccin-mocha")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "catppuccin-mocha",
        yaml: CATPPUCCIN_MOCHA_YAML,
    },
    BuiltinTheme {
        id: "gameboy",
        yaml: GAMEBOY_YAML,
    },
];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| -> Result<u8, String> {
            let digits = s
                .get(range)
                .ok_or_else(|| format!("Invalid color format: {}", s))?;
            u8::from_str_radix(digits, 16).map_err(|e| e.to_string())
        };

        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    pub colors: PaletteData,
}

/// Palette colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct PaletteData {
    pub background: String,
    pub text: String,
    pub cursor: String,
    #[serde(default)]
    pub text_alt: Option<String>,
    #[serde(default)]
    pub highlight: Option<String>,
    #[serde(default)]
    pub note_held: Option<String>,
}

/// Resolved colors used by every draw routine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    /// Default text
    pub text: Color,
    /// Text drawn over a filled cursor or highlight
    pub text_alt: Color,
    /// Active entry in the menu map
    pub highlight: Color,
    /// Cursor fill and outline
    pub cursor: Color,
    /// Background of a channel that is currently sounding
    pub note_held: Color,
}

impl Palette {
    /// Hardcoded fallback, matches the catppuccin-mocha builtin
    pub const fn catppuccin_mocha() -> Self {
        Self {
            background: Color::rgb(0x1E, 0x1E, 0x2E),
            text: Color::rgb(0xA6, 0xE3, 0xA1),
            text_alt: Color::rgb(0x11, 0x11, 0x1B),
            highlight: Color::rgb(0x45, 0x47, 0x5A),
            cursor: Color::rgb(0x89, 0xB4, 0xFA),
            note_held: Color::rgb(0xF9, 0xE2, 0xAF),
        }
    }
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub palette: Palette,
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme.
    ///
    /// Optional colors fall back to values derived from the required ones.
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let colors = data.colors;
        let background = Color::from_hex(&colors.background)?;
        let text = Color::from_hex(&colors.text)?;
        let cursor = Color::from_hex(&colors.cursor)?;
        let optional = |value: &Option<String>, fallback: Color| -> Result<Color, String> {
            Ok(value
                .as_deref()
                .map(Color::from_hex)
                .transpose()?
                .unwrap_or(fallback))
        };

        Ok(Theme {
            name: data.name,
            palette: Palette {
                background,
                text,
                cursor,
                text_alt: optional(&colors.text_alt, background)?,
                highlight: optional(&colors.highlight, cursor)?,
                note_held: optional(&colors.note_held, cursor)?,
            },
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        match Theme::from_yaml(CATPPUCCIN_MOCHA_YAML) {
            Ok(theme) => theme,
            Err(_) => Theme {
                name: "Catppuccin Mocha".to_string(),
                palette: Palette::catppuccin_mocha(),
            },
        }
    }
}
