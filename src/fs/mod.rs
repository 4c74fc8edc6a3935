//! Filesystem utilities for papermill.
//!
//! This module provides atomic writes for rendered booklet sources and the
//! post-batch cleanup of compiler artifacts.

pub mod atomic;
pub mod cleanup;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
