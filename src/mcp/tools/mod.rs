//! MCP tool definitions for pixelpaint
//!
//! Each tool has an input struct (deserialized and schema-described for the
//! caller) and a `run_*` function that applies it to a [`Session`] and
//! returns the confirmation text.

pub mod canvas;
pub mod drawing;
pub mod files;

use crate::canvas::Canvas;
use crate::config::PaintConfig;
use crate::error::Result;
use crate::registry::CanvasRegistry;

/// Everything a tool call can touch: the canvases and the server config.
#[derive(Debug, Default)]
pub struct Session {
    pub registry: CanvasRegistry,
    pub config: PaintConfig,
}

impl Session {
    pub fn new(config: PaintConfig) -> Self {
        Self { registry: CanvasRegistry::new(), config }
    }

    /// The requested canvas name, or the configured default.
    pub fn canvas_name<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested.unwrap_or(self.config.canvas.default_name.as_str())
    }

    /// Look up the requested canvas for mutation.
    pub fn canvas_mut(&mut self, requested: Option<&str>) -> Result<&mut Canvas> {
        let name = requested.unwrap_or(self.config.canvas.default_name.as_str()).to_string();
        self.registry.get_mut(&name)
    }

    /// Look up the requested canvas.
    pub fn canvas(&self, requested: Option<&str>) -> Result<&Canvas> {
        self.registry.get(self.canvas_name(requested))
    }
}
