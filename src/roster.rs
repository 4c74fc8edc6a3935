//! Roster loading.
//!
//! A roster is a two-column CSV of identifier and display name. Reading
//! stops at the first row with an empty identifier, so a trailing block
//! of notes below the list does not leak into the batch.

use std::fs;
use std::path::Path;

use crate::error::{MillError, Result};

/// One roster row: a student identifier and a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRecord {
    pub identifier: String,
    pub name: String,
}

/// Reads a roster file, skipping `skip_rows` header lines.
pub fn load(path: &Path, skip_rows: usize) -> Result<Vec<RosterRecord>> {
    let text = fs::read_to_string(path).map_err(|e| {
        MillError::UserError(format!(
            "cannot read roster '{}': {}.\nFix: check the roster path in the config.",
            path.display(),
            e
        ))
    })?;
    parse(&text, skip_rows)
}

/// Parses roster text. Only the first comma splits a row, so a quoted
/// name may itself contain commas.
pub fn parse(text: &str, skip_rows: usize) -> Result<Vec<RosterRecord>> {
    let mut records = Vec::new();
    for (index, line) in text.lines().enumerate().skip(skip_rows) {
        let (raw_id, raw_name) = match line.split_once(',') {
            Some((id, name)) => (id, name),
            None => (line, ""),
        };

        let identifier = unquote(raw_id.trim()).trim();
        if identifier.is_empty() {
            break;
        }
        if identifier.contains(['/', '\\']) {
            return Err(MillError::UserError(format!(
                "roster row {}: identifier '{}' contains a path separator.\n\
                 Fix: remove slashes from the identifier column.",
                index + 1,
                identifier
            )));
        }

        let name = unquote(raw_name.trim()).trim();
        records.push(RosterRecord {
            identifier: identifier.to_string(),
            name: if name.is_empty() { "Unknown" } else { name }.to_string(),
        });
    }
    Ok(records)
}

fn unquote(field: &str) -> &str {
    field
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(field)
}
