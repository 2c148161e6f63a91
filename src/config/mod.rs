//! Configuration module for the pixelpaint server
//!
//! Provides types and parsing for `pxpaint.toml`.

pub mod loader;
pub mod schema;

pub use loader::{find_config, find_config_from, load_config, ConfigError, CONFIG_FILE};
pub use schema::*;
