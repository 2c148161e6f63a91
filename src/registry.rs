//! Canvas registry: independent canvases keyed by name
//!
//! Creation and loading insert or overwrite an entry; every other operation
//! looks its canvas up and fails with [`CanvasError::CanvasNotFound`] if it
//! is missing. "default" is only a conventional key.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::canvas::Canvas;
use crate::error::{CanvasError, Result};
use crate::output;

/// Name used when a caller doesn't pick one.
pub const DEFAULT_CANVAS: &str = "default";

/// Registry of named canvases.
#[derive(Debug, Clone, Default)]
pub struct CanvasRegistry {
    canvases: HashMap<String, Canvas>,
}

impl CanvasRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { canvases: HashMap::new() }
    }

    /// Create a transparent canvas under `name`, replacing any existing one.
    pub fn create(&mut self, name: &str, width: u32, height: u32) -> Result<&mut Canvas> {
        let canvas = Canvas::new(width, height)?;
        info!(name, width, height, "created canvas");
        Ok(self.insert(name, canvas))
    }

    /// Insert a canvas under `name`, replacing any existing one.
    pub fn insert(&mut self, name: &str, canvas: Canvas) -> &mut Canvas {
        match self.canvases.entry(name.to_string()) {
            Entry::Occupied(mut entry) => {
                entry.insert(canvas);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(canvas),
        }
    }

    /// Load a JSON canvas document from `path` under `name`.
    ///
    /// The existing entry, if any, is only replaced once the file loads.
    pub fn load(&mut self, name: &str, path: &Path) -> Result<&mut Canvas> {
        let canvas = output::load_json(path)?;
        info!(name, path = %path.display(), "loaded canvas");
        Ok(self.insert(name, canvas))
    }

    /// Get a canvas by name.
    pub fn get(&self, name: &str) -> Result<&Canvas> {
        self.canvases.get(name).ok_or_else(|| CanvasError::CanvasNotFound(name.to_string()))
    }

    /// Get a canvas by name for mutation.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Canvas> {
        self.canvases.get_mut(name).ok_or_else(|| CanvasError::CanvasNotFound(name.to_string()))
    }

    /// Check if a canvas with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.canvases.contains_key(name)
    }

    /// Remove and return a canvas.
    pub fn remove(&mut self, name: &str) -> Result<Canvas> {
        self.canvases.remove(name).ok_or_else(|| CanvasError::CanvasNotFound(name.to_string()))
    }

    /// Names of all registered canvases, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.canvases.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.canvases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canvases.is_empty()
    }
}
