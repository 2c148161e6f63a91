//! Drawing tools: set_pixel, draw_line, draw_rectangle, flood_fill.

use schemars::JsonSchema;
use serde::Deserialize;

use super::Session;
use crate::color::ColorInput;
use crate::draw::DrawOp;
use crate::error::Result;

/// Input parameters for the set_pixel tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SetPixelInput {
    /// Name of the canvas (defaults to "default")
    pub canvas_name: Option<String>,
    /// X coordinate of the pixel
    pub x: i64,
    /// Y coordinate of the pixel
    pub y: i64,
    /// Color name (e.g. "red", "blue") or hex code (e.g. "#FF0000")
    pub color: ColorInput,
}

/// Input parameters for the draw_line tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DrawLineInput {
    /// Name of the canvas (defaults to "default")
    pub canvas_name: Option<String>,
    /// Starting X coordinate
    pub x1: i64,
    /// Starting Y coordinate
    pub y1: i64,
    /// Ending X coordinate
    pub x2: i64,
    /// Ending Y coordinate
    pub y2: i64,
    /// Line color
    pub color: ColorInput,
}

/// Input parameters for the draw_rectangle tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DrawRectangleInput {
    /// Name of the canvas (defaults to "default")
    pub canvas_name: Option<String>,
    /// Top-left X coordinate
    pub x: i64,
    /// Top-left Y coordinate
    pub y: i64,
    /// Rectangle width
    pub width: i64,
    /// Rectangle height
    pub height: i64,
    /// Rectangle color
    pub color: ColorInput,
    /// Whether to fill the rectangle (default: false)
    #[serde(default)]
    pub filled: bool,
}

/// Input parameters for the flood_fill tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct FloodFillInput {
    /// Name of the canvas (defaults to "default")
    pub canvas_name: Option<String>,
    /// Starting X coordinate for fill
    pub x: i64,
    /// Starting Y coordinate for fill
    pub y: i64,
    /// Fill color
    pub color: ColorInput,
}

fn apply(session: &mut Session, canvas_name: Option<&str>, op: &DrawOp) -> Result<usize> {
    session.canvas_mut(canvas_name)?.apply(op)
}

pub fn run_set_pixel(session: &mut Session, input: SetPixelInput) -> Result<String> {
    let SetPixelInput { canvas_name, x, y, color } = input;
    let text = format!("Set pixel at ({}, {}) to {}", x, y, color);
    apply(session, canvas_name.as_deref(), &DrawOp::Set { x, y, color })?;
    Ok(text)
}

pub fn run_draw_line(session: &mut Session, input: DrawLineInput) -> Result<String> {
    let DrawLineInput { canvas_name, x1, y1, x2, y2, color } = input;
    let text = format!("Drew line from ({}, {}) to ({}, {}) in {}", x1, y1, x2, y2, color);
    apply(session, canvas_name.as_deref(), &DrawOp::Line { x1, y1, x2, y2, color })?;
    Ok(text)
}

pub fn run_draw_rectangle(session: &mut Session, input: DrawRectangleInput) -> Result<String> {
    let DrawRectangleInput { canvas_name, x, y, width, height, color, filled } = input;
    let text = format!(
        "Drew {} rectangle at ({}, {}) size {}x{} in {}",
        if filled { "filled" } else { "outline" },
        x,
        y,
        width,
        height,
        color
    );
    apply(session, canvas_name.as_deref(), &DrawOp::Rect { x, y, width, height, color, filled })?;
    Ok(text)
}

pub fn run_flood_fill(session: &mut Session, input: FloodFillInput) -> Result<String> {
    let FloodFillInput { canvas_name, x, y, color } = input;
    let text = format!("Flood filled area starting at ({}, {}) with {}", x, y, color);
    apply(session, canvas_name.as_deref(), &DrawOp::Flood { x, y, color })?;
    Ok(text)
}
