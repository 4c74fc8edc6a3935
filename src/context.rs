//! Batch context resolution for papermill.
//!
//! This module provides the "environment resolution" layer that anchors a
//! batch run to its config file and resolves the template, roster, logo,
//! and output paths from it.
//!
//! All papermill commands use this module to locate their inputs, ensuring
//! that a run behaves the same regardless of which working directory the
//! command is invoked from: relative paths in the config always resolve
//! against the directory the config file lives in.

use crate::config::Config;
use crate::error::Result;
use crate::naming;
use std::path::{Path, PathBuf};

/// Name of the run event log written into the output directory.
pub const EVENTS_FILE_NAME: &str = "papermill.events.ndjson";

/// Resolved configuration and paths for a papermill batch run.
///
/// The output directory is resolved eagerly; the other paths are derived
/// on demand because not every command needs all of them.
#[derive(Debug, Clone)]
pub struct BatchContext {
    /// The loaded and validated batch configuration.
    pub config: Config,

    /// Directory the config file lives in. Relative paths in the config
    /// resolve against this directory.
    pub base_dir: PathBuf,

    /// Directory the rendered booklets and compiled PDFs are written to.
    pub output_dir: PathBuf,
}

impl BatchContext {
    /// Resolve the batch context from a config file path.
    ///
    /// Loads and validates the config, then anchors every other path at
    /// the config file's directory.
    ///
    /// # Returns
    ///
    /// * `Ok(BatchContext)` - Successfully resolved context
    /// * `Err(MillError::UserError)` - If the config is missing or invalid (exit code 1)
    pub fn resolve<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        let config = Config::load(config_path)?;

        let base_dir = match config_path.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok(Self::from_config(config, base_dir))
    }

    /// Build a context from an already loaded config.
    ///
    /// This is useful for testing or when CLI overrides have been applied
    /// to the config after loading.
    pub fn from_config(config: Config, base_dir: PathBuf) -> Self {
        let output_dir = resolve_path(&base_dir, Path::new(&config.output_dir()));
        Self {
            config,
            base_dir,
            output_dir,
        }
    }

    /// Get the path to the booklet template.
    pub fn template_path(&self) -> PathBuf {
        resolve_path(&self.base_dir, Path::new(&self.config.template))
    }

    /// Get the path to the roster file.
    pub fn roster_path(&self) -> PathBuf {
        resolve_path(&self.base_dir, Path::new(&self.config.roster))
    }

    /// Get the path to the logo asset, if one is configured.
    pub fn logo_path(&self) -> Option<PathBuf> {
        self.config
            .logo
            .as_deref()
            .map(|logo| resolve_path(&self.base_dir, Path::new(logo)))
    }

    /// Get the path of the `.tex` source for one student's booklet.
    pub fn booklet_tex_path(&self, identifier: &str, name: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.tex", naming::booklet_stem(identifier, name)))
    }

    /// Get the path of the combined single-document `.tex` file.
    ///
    /// The combined document is named after the assessment type so that
    /// one output directory can hold combined files for several runs.
    pub fn combined_tex_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.tex", naming::safe_stem(&self.config.assessment_type)))
    }

    /// Get the path to the run event log.
    pub fn events_file(&self) -> PathBuf {
        self.output_dir.join(EVENTS_FILE_NAME)
    }
}

/// Resolve a possibly relative path against a base directory.
fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
