//! Configuration loading and discovery for `pxpaint.toml`

use super::schema::PaintConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file name searched for on disk
pub const CONFIG_FILE: &str = "pxpaint.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse pxpaint.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Find pxpaint.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for pxpaint.toml
/// 2. Check XDG_CONFIG_HOME/pixelpaint/pxpaint.toml (or ~/.config/pixelpaint/pxpaint.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("pixelpaint").join(CONFIG_FILE);
    config_path.exists().then_some(config_path)
}

/// Find pxpaint.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration.
///
/// If a path is provided, loads from that file. Otherwise, uses
/// [`find_config`]; with no config file found, returns the defaults.
pub fn load_config(path: Option<&Path>) -> Result<PaintConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(PaintConfig::default()),
    }
}

fn load_config_file(path: &Path) -> Result<PaintConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let mut config: PaintConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    // Relative output dirs are relative to the file that names them
    if let (Some(dir), Some(root)) = (config.output.dir.as_ref(), path.parent()) {
        if dir.is_relative() {
            config.output.dir = Some(root.join(dir));
        }
    }

    Ok(config)
}
