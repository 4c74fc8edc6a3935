//! Exit code constants for the papermill CLI.
//!
//! - 0: Success
//! - 1: User error (bad config, missing files)
//! - 2: Generation failure (parameter or catalog errors)
//! - 3: Compile failure (at least one booklet did not produce a PDF)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable config, template, or roster.
pub const USER_ERROR: i32 = 1;

/// Generation failure: parameter derivation or question catalog error.
pub const GENERATION_FAILURE: i32 = 2;

/// Compile failure: the batch completed but one or more PDFs failed to build.
pub const COMPILE_FAILURE: i32 = 3;
