//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! drag/drop resolution and board state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=board=debug,drop=debug` - scoped filtering
//! - `RUST_LOG=procboard::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/procboard/logs/procboard.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{BoardModel, DragKind, Mode};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`) and goes to stderr so
/// it never mixes with the rendered board on stdout.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
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

/// Lightweight snapshot of board shape for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub mode: Mode,
    pub drag: Option<DragKind>,
    pub has_targeted: bool,
    pub processes: Vec<ProcessShape>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessShape {
    pub id: String,
    pub slots: usize,
    pub filled: usize,
}

impl BoardSnapshot {
    pub fn from_model(model: &BoardModel) -> Self {
        Self {
            mode: model.mode,
            drag: model.drag.kind(),
            has_targeted: model.drag.has_targeted(),
            processes: model
                .processes
                .iter()
                .map(|p| ProcessShape {
                    id: p.id.to_string(),
                    slots: p.slot_count(),
                    filled: p.filled_count(),
                })
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &BoardSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.mode != other.mode {
            changes.push(format!("mode: {} → {}", self.mode.label(), other.mode.label()));
        }
        if self.drag != other.drag {
            changes.push(format!("drag: {:?} → {:?}", self.drag, other.drag));
        } else if self.has_targeted != other.has_targeted {
            changes.push(format!("targeted: {}", other.has_targeted));
        }

        if self.processes.len() != other.processes.len() {
            changes.push(format!(
                "process count: {} → {}",
                self.processes.len(),
                other.processes.len()
            ));
        }

        for after in &other.processes {
            match self.processes.iter().find(|p| p.id == after.id) {
                Some(before) if before != after => changes.push(format!(
                    "{}: {}/{} → {}/{} filled/slots",
                    after.id, before.filled, before.slots, after.filled, after.slots
                )),
                Some(_) => {}
                None => changes.push(format!("{}: added", after.id)),
            }
        }
        for before in &self.processes {
            if !other.processes.iter().any(|p| p.id == before.id) {
                changes.push(format!("{}: removed", before.id));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
