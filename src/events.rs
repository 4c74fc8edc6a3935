//! Run event logging for papermill.
//!
//! Each batch appends its notable actions to an NDJSON log (one JSON
//! object per line) in the output directory, so an instructor can later
//! answer "which run produced this folder, and which students failed".
//!
//! # Event Format
//!
//! Each event is a JSON object with the following fields:
//! - `ts`: RFC3339 timestamp
//! - `action`: The action performed (run_started, paper_written, etc.)
//! - `actor`: The operator string (e.g., `user@HOST`)
//! - `record`: Optional roster identifier for per-student events
//! - `details`: Freeform object with action-specific details

use crate::error::{MillError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Actions that can be logged as run events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunAction {
    /// Batch run started
    RunStarted,
    /// Booklet source rendered and written
    PaperWritten,
    /// PDF produced for a record
    CompileSucceeded,
    /// Compiler failed for a record
    CompileFailed,
    /// Output directory cleanup performed
    Cleanup,
    /// Batch run finished
    RunFinished,
}

impl std::fmt::Display for RunAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunAction::RunStarted => write!(f, "run_started"),
            RunAction::PaperWritten => write!(f, "paper_written"),
            RunAction::CompileSucceeded => write!(f, "compile_succeeded"),
            RunAction::CompileFailed => write!(f, "compile_failed"),
            RunAction::Cleanup => write!(f, "cleanup"),
            RunAction::RunFinished => write!(f, "run_finished"),
        }
    }
}

/// One line of the run log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunEvent {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: RunAction,

    /// The operator who ran the batch (e.g., `user@HOST`).
    pub actor: String,

    /// Optional roster identifier for per-student events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<String>,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl RunEvent {
    /// Create a new event with the given action.
    ///
    /// The timestamp is set to the current time, and the actor is
    /// determined from the environment (USER@HOSTNAME).
    pub fn new(action: RunAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            record: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the roster identifier for this event.
    pub fn with_record(mut self, identifier: impl Into<String>) -> Self {
        self.record = Some(identifier.into());
        self
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| MillError::UserError(format!("failed to serialize event to JSON: {}", e)))
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the run log.
///
/// The event is written as a single JSON line with a trailing newline.
/// The file and its parent directory are created if they do not exist.
///
/// # Returns
///
/// * `Ok(())` - Event was successfully appended
/// * `Err(MillError::UserError)` - Serialization or write failed
pub fn append_event(events_file: &Path, event: &RunEvent) -> Result<()> {
    let json_line = event.to_ndjson_line()?;

    if let Some(parent) = events_file.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            MillError::UserError(format!(
                "failed to create output directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(events_file)
        .map_err(|e| {
            MillError::UserError(format!(
                "failed to open run log '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        MillError::UserError(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    file.sync_all().map_err(|e| {
        MillError::UserError(format!(
            "failed to sync run log '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    Ok(())
}
