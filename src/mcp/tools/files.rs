//! File tools: save_image and load_image.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::Session;
use crate::error::Result;
use crate::output::{self, SaveFormat};

/// Input parameters for the save_image tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SaveImageInput {
    /// Name of the canvas (defaults to "default")
    pub canvas_name: Option<String>,
    /// Output filename
    pub filename: String,
    /// Output format (default: "png")
    #[serde(default)]
    pub format: SaveFormat,
}

/// Input parameters for the load_image tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct LoadImageInput {
    /// JSON file to load
    pub filename: String,
    /// Name for the loaded canvas (defaults to "default")
    pub canvas_name: Option<String>,
}

pub fn run_save_image(session: &mut Session, input: SaveImageInput) -> Result<String> {
    let path = session.config.output.resolve(&input.filename);
    let canvas = session.canvas(input.canvas_name.as_deref())?;
    output::save(canvas, &path, input.format)?;
    info!(path = %path.display(), format = %input.format, "saved canvas");
    Ok(format!(
        "Saved canvas as {} to {}",
        input.format.as_str().to_uppercase(),
        input.filename
    ))
}

pub fn run_load_image(session: &mut Session, input: LoadImageInput) -> Result<String> {
    let path = session.config.output.resolve(&input.filename);
    let name = session.canvas_name(input.canvas_name.as_deref()).to_string();
    session.registry.load(&name, &path)?;
    Ok(format!("Loaded canvas from {} as \"{}\"", input.filename, name))
}
