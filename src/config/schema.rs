//! Configuration schema types for `pxpaint.toml`
//!
//! Every section is optional; a missing file or section yields the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::canvas::MAX_DIMENSION;
use crate::registry::DEFAULT_CANVAS;

/// Canvas defaults and limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Name used when a tool call omits the canvas name
    #[serde(default = "default_name")]
    pub default_name: String,
    /// Largest width or height accepted by `create_canvas`
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { default_name: default_name(), max_dimension: default_max_dimension() }
    }
}

fn default_name() -> String {
    DEFAULT_CANVAS.to_string()
}

fn default_max_dimension() -> u32 {
    MAX_DIMENSION
}

/// Where saved and loaded files live
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Base directory for relative filenames (default: current directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl OutputConfig {
    /// Resolve a caller-supplied filename.
    ///
    /// Absolute paths are returned unchanged; relative ones are joined onto
    /// `dir` when set.
    pub fn resolve(&self, filename: &str) -> PathBuf {
        let path = Path::new(filename);
        match &self.dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive, e.g. "warn" or "pixelpaint=debug"
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaintConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "canvas.max_dimension")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pxpaint.toml: '{}' {}", self.field, self.message)
    }
}

impl PaintConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.canvas.default_name.is_empty() {
            errors.push(ConfigValidationError {
                field: "canvas.default_name".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }

        if self.canvas.max_dimension == 0 || self.canvas.max_dimension > MAX_DIMENSION {
            errors.push(ConfigValidationError {
                field: "canvas.max_dimension".to_string(),
                message: format!("must be between 1 and {}", MAX_DIMENSION),
            });
        }

        if self.log.level.trim().is_empty() {
            errors.push(ConfigValidationError {
                field: "log.level".to_string(),
                message: "must be a non-empty filter directive".to_string(),
            });
        }

        errors
    }
}
