//! Canvas lifecycle tools: create_canvas, clear_canvas, get_canvas_info, list_colors.

use schemars::JsonSchema;
use serde::Deserialize;

use super::Session;
use crate::canvas::check_dimensions_with_max;
use crate::color::{palette_listing, ColorInput};
use crate::error::Result;
use crate::preview::render_preview;

/// Input parameters for the create_canvas tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateCanvasInput {
    /// Canvas width in pixels (1-1000)
    pub width: i64,
    /// Canvas height in pixels (1-1000)
    pub height: i64,
    /// Optional name for the canvas (defaults to "default")
    pub name: Option<String>,
}

/// Input parameters for the clear_canvas tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ClearCanvasInput {
    /// Name of the canvas (defaults to "default")
    pub canvas_name: Option<String>,
    /// Clear color (default: "transparent")
    pub color: Option<ColorInput>,
}

/// Input parameters for the get_canvas_info tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CanvasInfoInput {
    /// Name of the canvas (defaults to "default")
    pub canvas_name: Option<String>,
}

pub fn run_create_canvas(session: &mut Session, input: CreateCanvasInput) -> Result<String> {
    check_dimensions_with_max(input.width, input.height, session.config.canvas.max_dimension)?;

    let name = session.canvas_name(input.name.as_deref()).to_string();
    let canvas = session.registry.create(&name, input.width as u32, input.height as u32)?;
    Ok(format!(
        "Created canvas \"{}\" with dimensions {}x{}",
        name,
        canvas.width(),
        canvas.height()
    ))
}

pub fn run_clear_canvas(session: &mut Session, input: ClearCanvasInput) -> Result<String> {
    let color = input.color.unwrap_or_else(|| "transparent".into());
    let resolved = color.resolve()?;
    session.canvas_mut(input.canvas_name.as_deref())?.clear(resolved);
    Ok(format!("Cleared canvas with {}", color))
}

pub fn run_canvas_info(session: &Session, input: CanvasInfoInput) -> Result<String> {
    let canvas = session.canvas(input.canvas_name.as_deref())?;
    Ok(format!(
        "Canvas dimensions: {}x{}\n\n{}",
        canvas.width(),
        canvas.height(),
        render_preview(canvas)
    ))
}

pub fn run_list_colors() -> String {
    format!(
        "Available colors:\n{}\n\nYou can also use hex codes like #FF0000 for custom colors.",
        palette_listing()
    )
}
