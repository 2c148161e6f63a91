//! MCP (Model Context Protocol) server implementation for pixelpaint
//!
//! Exposes the canvas engine as ten MCP tools (create_canvas, set_pixel,
//! draw_line, draw_rectangle, flood_fill, clear_canvas, save_image,
//! load_image, get_canvas_info, list_colors) so AI models can paint.
//!
//! Start the server with `pxpaint serve` (feature-gated).

mod server;
pub mod tools;

pub use server::{run_server, PaintMcpServer};
pub use tools::Session;
