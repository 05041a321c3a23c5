//! Screenshot generator for the tracker UI
//!
//! Renders headless screenshots from YAML scenario definitions.
//!
//! Usage:
//!   cargo run --bin screenshot -- --scenario scenarios/phrase-hovered.yaml
//!   cargo run --bin screenshot -- --all
//!   cargo run --bin screenshot -- --all --out-dir screenshots

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use tracker_ui::config::{TrackerConfig, UiConfig};
use tracker_ui::model::{DisplayCursor, Note, Screen, ScreenKind, TrackerState, N_CHANNELS};
use tracker_ui::theme::Theme;
use tracker_ui::view::{paint, FontSet};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "screenshot", about = "Generate screenshots of the tracker UI")]
struct Args {
    /// Path to a single scenario YAML file
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Run all scenarios in the scenarios directory
    #[arg(long)]
    all: bool,
    /// Directory containing scenario YAML files
    #[arg(long, default_value = "scenarios")]
    scenarios_dir: PathBuf,
    /// Directory for output PNG files
    #[arg(long, default_value = "screenshots")]
    out_dir: PathBuf,
    /// Override theme (file path or builtin id)
    #[arg(long)]
    theme: Option<String>,
    /// Font file to render with instead of the built-in font
    #[arg(long)]
    font: Option<PathBuf>,
    /// Override width in pixels
    #[arg(long)]
    width: Option<u32>,
    /// Override height in pixels
    #[arg(long)]
    height: Option<u32>,
}

// ---------------------------------------------------------------------------
// Scenario YAML schema
// ---------------------------------------------------------------------------

#[derive(Deserialize, Debug)]
struct Scenario {
    name: String,
    #[serde(default = "default_width")]
    width: u32,
    #[serde(default = "default_height")]
    height: u32,
    #[serde(default)]
    theme: Option<String>,
    #[serde(default)]
    screen: ScreenKind,
    /// Grid contents; replaces the demo data for `screen` when present
    #[serde(default)]
    data: Option<Screen>,
    #[serde(default)]
    cursor: DisplayCursor,
    #[serde(default)]
    tempo: Option<u8>,
    #[serde(default)]
    playing: Option<[Option<Note>; N_CHANNELS]>,
    /// Layout override; the user config is not consulted
    #[serde(default)]
    ui: Option<UiConfig>,
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    600
}

impl Scenario {
    fn state(&self) -> TrackerState {
        let mut state = match &self.data {
            Some(screen) => TrackerState::new(screen.clone()),
            None => TrackerState::demo(self.screen),
        };
        state.display_cursor = self.cursor;
        if let Some(tempo) = self.tempo {
            state.tempo = tempo;
        }
        if let Some(playing) = self.playing {
            state.playing = playing;
        }
        state
    }

    fn config(&self, font: Option<&Path>) -> Result<TrackerConfig> {
        let mut config = TrackerConfig::default();
        if let Some(ui) = self.ui {
            ui.validate()
                .with_context(|| format!("scenario '{}' layout", self.name))?;
            config.ui = ui;
        }
        if let Some(font) = font {
            config.font.file_path = font.to_path_buf();
        }
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Theme loading
// ---------------------------------------------------------------------------

fn load_theme_for_scenario(theme_override: Option<&str>, scenario_theme: Option<&str>) -> Theme {
    let Some(theme_ref) = theme_override.or(scenario_theme) else {
        return Theme::default();
    };

    // Try as file path first
    let path = PathBuf::from(theme_ref);
    if path.exists() {
        match tracker_ui::theme::from_file(&path) {
            Ok(theme) => return theme,
            Err(e) => eprintln!("Warning: failed to load theme file {}: {}", theme_ref, e),
        }
    }

    match tracker_ui::theme::load_theme(theme_ref) {
        Ok(theme) => theme,
        Err(e) => {
            eprintln!(
                "Warning: failed to load theme '{}': {}, using default",
                theme_ref, e
            );
            Theme::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn render_scenario(
    scenario: &Scenario,
    theme: &Theme,
    fonts: &mut FontSet,
    config: &TrackerConfig,
) -> Vec<u32> {
    let (width, height) = (scenario.width as usize, scenario.height as usize);
    let mut buffer = vec![0u32; width * height];
    paint(
        &mut buffer,
        width,
        height,
        fonts,
        config,
        &theme.palette,
        &scenario.state(),
    );
    buffer
}

fn save_png(buffer: &[u32], width: u32, height: u32, path: &Path) -> Result<()> {
    // Convert ARGB (0xAARRGGBB) to RGBA bytes
    let mut rgba = Vec::with_capacity(buffer.len() * 4);
    for &pixel in buffer {
        rgba.push(((pixel >> 16) & 0xFF) as u8);
        rgba.push(((pixel >> 8) & 0xFF) as u8);
        rgba.push((pixel & 0xFF) as u8);
        rgba.push(((pixel >> 24) & 0xFF) as u8);
    }

    let img = image::ImageBuffer::<image::Rgba<u8>, Vec<u8>>::from_raw(width, height, rgba)
        .context("failed to create image buffer")?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }

    img.save(path)
        .with_context(|| format!("saving PNG to {}", path.display()))?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Scenario loading
// ---------------------------------------------------------------------------

fn load_scenario(path: &Path) -> Result<Scenario> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    serde_yaml::from_str(&content).with_context(|| format!("parsing scenario {}", path.display()))
}

fn collect_scenarios(args: &Args) -> Result<Vec<Scenario>> {
    if let Some(ref path) = args.scenario {
        return Ok(vec![load_scenario(path)?]);
    }
    if !args.all {
        anyhow::bail!("pass --scenario <FILE> or --all");
    }
    if !args.scenarios_dir.exists() {
        anyhow::bail!(
            "scenarios directory does not exist: {}",
            args.scenarios_dir.display()
        );
    }

    let mut paths: Vec<_> = std::fs::read_dir(&args.scenarios_dir)
        .with_context(|| format!("reading scenarios dir {}", args.scenarios_dir.display()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .map(|ext| ext == "yaml" || ext == "yml")
                .unwrap_or(false)
        })
        .collect();
    paths.sort();

    let mut scenarios = Vec::new();
    for path in paths {
        match load_scenario(&path) {
            Ok(scenario) => scenarios.push(scenario),
            Err(e) => eprintln!("Warning: skipping {}: {:#}", path.display(), e),
        }
    }

    if scenarios.is_empty() {
        anyhow::bail!("no scenarios found in {}", args.scenarios_dir.display());
    }
    Ok(scenarios)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let scenarios = collect_scenarios(&args)?;

    eprintln!(
        "Rendering {} scenario(s) → {}",
        scenarios.len(),
        args.out_dir.display()
    );

    for mut scenario in scenarios {
        if let Some(w) = args.width {
            scenario.width = w;
        }
        if let Some(h) = args.height {
            scenario.height = h;
        }

        let theme = load_theme_for_scenario(args.theme.as_deref(), scenario.theme.as_deref());
        let config = scenario.config(args.font.as_deref())?;
        let mut fonts = FontSet::from_config(&config.font)?;

        eprint!("  {} ...", scenario.name);
        let buffer = render_scenario(&scenario, &theme, &mut fonts, &config);

        let out_path = args.out_dir.join(format!("screenshot-{}.png", scenario.name));
        save_png(&buffer, scenario.width, scenario.height, &out_path)?;
        eprintln!(" saved {}", out_path.display());
    }

    eprintln!("Done!");
    Ok(())
}
