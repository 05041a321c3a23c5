//! Tracker UI - tab, grid and sidebar rendering for a music tracker
//!
//! This crate lays out the tracker screens proportionally to the window,
//! formats cell values into fixed-width text and draws the editing cursor.

pub mod config;
pub mod config_paths;
pub mod format;
pub mod model;
pub mod theme;
pub mod tracing;
pub mod view;

// Re-export commonly used types
pub use config::TrackerConfig;
pub use model::{DisplayCursor, Screen, ScreenKind, TrackerState};
pub use theme::Theme;
