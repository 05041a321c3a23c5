//! Tracing setup and state-change diagnostics
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=tracker_ui::view=trace` - per-grid paging details
//!
//! Logs are also written to `~/.config/tracker-ui/logs/tracker-ui.log` with
//! daily rotation, at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{DisplayCursor, ScreenKind, TrackerState};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "tracker-ui.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// The parts of the tracker state the view reacts to, for diffing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub screen: ScreenKind,
    pub cursor: DisplayCursor,
}

impl ViewSnapshot {
    pub fn from_state(state: &TrackerState) -> Self {
        Self {
            screen: state.screen.kind(),
            cursor: state.display_cursor,
        }
    }

    /// Describe what changed between two snapshots, None when nothing did
    pub fn diff(&self, other: &ViewSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.screen != other.screen {
            changes.push(format!("screen: {} → {}", self.screen, other.screen));
        }
        let (before, after) = (self.cursor, other.cursor);
        if (before.row, before.col) != (after.row, after.col) {
            changes.push(format!(
                "cursor: ({},{}) → ({},{})",
                before.row, before.col, after.row, after.col
            ));
        }
        if before.selected != after.selected {
            let status = if after.selected {
                "selected"
            } else {
                "hovered"
            };
            changes.push(format!("cell {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
