//! Error types for the papermill CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for papermill operations.
///
/// Each variant maps to a specific exit code so that batch scripts can
/// distinguish bad input from generation bugs from compiler trouble.
#[derive(Error, Debug)]
pub enum MillError {
    /// User provided invalid arguments, or a config, template, or roster
    /// file is missing or malformed.
    #[error("{0}")]
    UserError(String),

    /// A parameter range has its bounds reversed.
    #[error("invalid range for '{label}': low bound {low} exceeds high bound {high}")]
    InvalidRange { label: String, low: i64, high: i64 },

    /// More values were requested from one seed than its digest can supply.
    #[error("seed for '{label}' exhausted: {requested} values requested but the digest provides 16")]
    InsufficientSeedEntropy { label: String, requested: usize },

    /// An angle table lookup with an index outside 0..=15.
    #[error("angle index {index} is out of range: expected 0 through 15")]
    InvalidAngleIndex { index: i64 },

    /// A question variant selector outside the catalog for that question.
    #[error("variant selector {selector} is out of range for {question}: expected 1 through {max}")]
    InvalidVariantSelector {
        question: &'static str,
        selector: i64,
        max: i64,
    },

    /// One or more booklets in a completed batch failed to produce a PDF.
    #[error("compilation failed: {0}")]
    CompileError(String),
}

impl MillError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MillError::UserError(_) => exit_codes::USER_ERROR,
            MillError::InvalidRange { .. } => exit_codes::GENERATION_FAILURE,
            MillError::InsufficientSeedEntropy { .. } => exit_codes::GENERATION_FAILURE,
            MillError::InvalidAngleIndex { .. } => exit_codes::GENERATION_FAILURE,
            MillError::InvalidVariantSelector { .. } => exit_codes::GENERATION_FAILURE,
            MillError::CompileError(_) => exit_codes::COMPILE_FAILURE,
        }
    }
}

/// Result type alias for papermill operations.
pub type Result<T> = std::result::Result<T, MillError>;
