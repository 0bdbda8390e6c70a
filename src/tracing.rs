//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging gesture
//! classification and state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=session=trace` - every per-sample state diff
//! - `RUST_LOG=pip_drag::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/pip-drag/logs/pip-drag.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{InteractionState, PipModel, Rect};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and goes to stderr so stdout stays
/// free for command output. File logging always records debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "pip-drag.log");
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

/// Lightweight snapshot of session state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub state: InteractionState,
    pub pending: Option<u64>,
    pub top: Option<Rect>,
    pub scale: Option<f32>,
    pub alpha: Option<f32>,
}

impl SessionSnapshot {
    pub fn from_model(model: &PipModel) -> Self {
        let geometry = model.geometry();
        Self {
            state: model.state(),
            pending: model.pending().map(|p| p.id.0),
            top: geometry.map(|g| g.top),
            scale: geometry.map(|g| g.scale),
            alpha: geometry.map(|g| g.alpha),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SessionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.state != other.state {
            changes.push(format!("state: {} → {}", self.state, other.state));
        }
        if self.pending != other.pending {
            changes.push(match other.pending {
                Some(id) => format!("pending: animation #{}", id),
                None => "pending: cleared".to_string(),
            });
        }
        match (self.top, other.top) {
            (Some(a), Some(b)) if a != b => changes.push(format!(
                "top: ({:.1},{:.1} {:.1}x{:.1}) → ({:.1},{:.1} {:.1}x{:.1})",
                a.x, a.y, a.width, a.height, b.x, b.y, b.width, b.height
            )),
            (None, Some(_)) => changes.push("geometry: attached".to_string()),
            (Some(_), None) => changes.push("geometry: released".to_string()),
            _ => {}
        }
        if let (Some(a), Some(b)) = (self.scale, other.scale) {
            if a != b {
                changes.push(format!("scale: {:.3} → {:.3}", a, b));
            }
        }
        if let (Some(a), Some(b)) = (self.alpha, other.alpha) {
            if a != b {
                changes.push(format!("alpha: {:.3} → {:.3}", a, b));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
