//! Error type shared by every canvas operation

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the canvas core.
///
/// Every variant renders as a plain sentence, since the tool server reports
/// failures to its caller as text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CanvasError {
    /// Direct pixel access outside the grid
    #[error("Pixel coordinates ({x}, {y}) out of bounds for {width}x{height} canvas")]
    OutOfBounds { x: i64, y: i64, width: u32, height: u32 },
    /// Canvas dimensions outside the allowed range
    #[error("Invalid canvas dimensions {width}x{height} (each side must be 1-{max})")]
    InvalidDimensions { width: i64, height: i64, max: u32 },
    /// Unparseable color string
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    /// Operation on a canvas name that was never created or loaded
    #[error("Canvas \"{0}\" not found. Create it first with create_canvas.")]
    CanvasNotFound(String),
    /// Structured import with missing or malformed fields
    #[error("Invalid canvas file {}: {reason}", path.display())]
    InvalidFile { path: PathBuf, reason: String },
    /// Underlying read/write failure
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// PNG encoding failure
    #[error("Image error on {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Coarse classification of a [`CanvasError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Pixel access outside the grid, or invalid canvas dimensions
    OutOfBounds,
    InvalidColor,
    CanvasNotFound,
    InvalidFile,
    /// Read/write or encode failure on a persistence path
    IoFailure,
}

impl CanvasError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CanvasError::OutOfBounds { .. } | CanvasError::InvalidDimensions { .. } => {
                ErrorKind::OutOfBounds
            }
            CanvasError::InvalidColor(_) => ErrorKind::InvalidColor,
            CanvasError::CanvasNotFound(_) => ErrorKind::CanvasNotFound,
            CanvasError::InvalidFile { .. } => ErrorKind::InvalidFile,
            CanvasError::Io { .. } | CanvasError::Image { .. } => ErrorKind::IoFailure,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CanvasError::Io { path: path.into(), source }
    }

    pub(crate) fn invalid_file(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        CanvasError::InvalidFile { path: path.into(), reason: reason.into() }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CanvasError>;
