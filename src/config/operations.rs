//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{MillError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            MillError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| MillError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| MillError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `assessment_type`, `template`, `roster`, and `compiler` must be non-empty
    /// - `output_dir`, when present, must be non-empty
    /// - `compile_attempts` must be positive
    pub fn validate(&self) -> Result<()> {
        if self.assessment_type.trim().is_empty() {
            return Err(MillError::UserError(
                "config validation failed: assessment_type must not be empty".to_string(),
            ));
        }

        if self.template.trim().is_empty() {
            return Err(MillError::UserError(
                "config validation failed: template must not be empty".to_string(),
            ));
        }

        if self.roster.trim().is_empty() {
            return Err(MillError::UserError(
                "config validation failed: roster must not be empty".to_string(),
            ));
        }

        if self.compiler.trim().is_empty() {
            return Err(MillError::UserError(
                "config validation failed: compiler must not be empty".to_string(),
            ));
        }

        if let Some(dir) = &self.output_dir {
            if dir.trim().is_empty() {
                return Err(MillError::UserError(
                    "config validation failed: output_dir must not be empty when set".to_string(),
                ));
            }
        }

        if self.compile_attempts == 0 {
            return Err(MillError::UserError(
                "config validation failed: compile_attempts must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
