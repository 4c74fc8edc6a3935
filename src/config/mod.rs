//! Configuration model for papermill.
//!
//! This module defines the Config struct that represents an assessment's
//! `papermill.yaml`. It supports forward-compatible YAML parsing (unknown
//! fields are ignored), sensible defaults for optional fields, and
//! validation of config values.

mod model;
mod operations;
mod types;


// Re-export public API
pub use model::Config;
