//! Pixelpaint - named RGBA pixel canvases with drawing tools
//!
//! This library provides functionality to:
//! - Keep named canvases of RGBA pixels in a process-wide registry
//! - Draw pixels, Bresenham lines, rectangles and 4-connected flood fills
//! - Save canvases as PNG or as a reloadable JSON document
//! - Render a coarse text preview for terminals and chat transcripts
//! - Serve all of the above as MCP tools (feature `mcp`)

pub mod canvas;
pub mod cli;
pub mod color;
pub mod config;
pub mod draw;
pub mod error;
pub mod logging;
#[cfg(feature = "mcp")]
pub mod mcp;
pub mod output;
pub mod preview;
pub mod registry;

pub use canvas::Canvas;
pub use color::{Color, ColorInput};
pub use error::{CanvasError, ErrorKind};
pub use registry::CanvasRegistry;
