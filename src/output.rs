//! Canvas persistence: PNG export and the JSON canvas document
//!
//! The JSON document is the only lossless, reloadable form:
//!
//! ```json
//! { "width": 2, "height": 1, "pixels": [[{"r":0,"g":0,"b":0,"a":0}, ...]] }
//! ```

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::canvas::{check_dimensions, Canvas};
use crate::color::Color;
use crate::error::{CanvasError, Result};

/// File formats accepted by `save_image`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum SaveFormat {
    #[default]
    Png,
    Json,
}

impl SaveFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaveFormat::Png => "png",
            SaveFormat::Json => "json",
        }
    }

    /// Guess the format from a file extension (`.png` or `.json`).
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension().and_then(|e| e.to_str()).and_then(|e| e.parse().ok())
    }
}

impl FromStr for SaveFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(SaveFormat::Png),
            "json" => Ok(SaveFormat::Json),
            other => Err(format!("unknown format '{}', expected png or json", other)),
        }
    }
}

impl std::fmt::Display for SaveFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-disk form of a canvas: dimensions plus the row-major pixel grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasDocument {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vec<Color>>,
}

impl From<&Canvas> for CanvasDocument {
    fn from(canvas: &Canvas) -> Self {
        CanvasDocument {
            width: canvas.width(),
            height: canvas.height(),
            pixels: canvas.rows().map(|row| row.to_vec()).collect(),
        }
    }
}

/// Loose mirror of [`CanvasDocument`] so missing fields can be reported by
/// name instead of as a bare serde error.
#[derive(Deserialize)]
struct RawDocument {
    width: Option<i64>,
    height: Option<i64>,
    pixels: Option<Vec<Vec<Color>>>,
}

/// Render the canvas into an RGBA image of the same dimensions.
pub fn to_rgba_image(canvas: &Canvas) -> RgbaImage {
    let mut img = RgbaImage::new(canvas.width(), canvas.height());
    // Both buffers are row-major over the same dimensions
    for (dst, src) in img.pixels_mut().zip(canvas.pixels()) {
        *dst = Rgba(src.to_rgba());
    }
    img
}

/// Create parent directories if they don't exist
fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| CanvasError::io(parent, e))?;
        }
    }
    Ok(())
}

/// Write the canvas as a PNG file.
pub fn save_png(canvas: &Canvas, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    to_rgba_image(canvas)
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| CanvasError::Image { path: path.to_path_buf(), source })
}

/// Write the canvas as a pretty-printed JSON document.
pub fn save_json(canvas: &Canvas, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(&CanvasDocument::from(canvas))
        .map_err(|e| CanvasError::invalid_file(path, e.to_string()))?;
    fs::write(path, json).map_err(|e| CanvasError::io(path, e))
}

/// Save in the requested format.
pub fn save(canvas: &Canvas, path: &Path, format: SaveFormat) -> Result<()> {
    match format {
        SaveFormat::Png => save_png(canvas, path),
        SaveFormat::Json => save_json(canvas, path),
    }
}

/// Load a canvas from a JSON document.
///
/// Pixel values are taken as already canonical; no color resolution happens.
pub fn load_json(path: &Path) -> Result<Canvas> {
    let content = fs::read_to_string(path).map_err(|e| CanvasError::io(path, e))?;
    parse_document(&content).map_err(|reason| CanvasError::invalid_file(path, reason))
}

/// Parse and validate document text into a canvas.
pub fn parse_document(content: &str) -> std::result::Result<Canvas, String> {
    let raw: RawDocument = serde_json::from_str(content).map_err(|e| e.to_string())?;

    let width = raw.width.ok_or("missing 'width'")?;
    let height = raw.height.ok_or("missing 'height'")?;
    let pixels = raw.pixels.ok_or("missing 'pixels'")?;
    check_dimensions(width, height).map_err(|e| e.to_string())?;

    if pixels.len() != height as usize {
        return Err(format!("'pixels' has {} rows, expected {}", pixels.len(), height));
    }
    if let Some((y, row)) = pixels.iter().enumerate().find(|(_, r)| r.len() != width as usize) {
        return Err(format!("row {} has {} pixels, expected {}", y, row.len(), width));
    }

    Canvas::from_rows(width as u32, height as u32, pixels)
        .ok_or_else(|| "pixel grid does not match dimensions".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    fn sample() -> Canvas {
        let mut canvas = Canvas::new(3, 2).unwrap();
        canvas.set_pixel(0, 0, "red").unwrap();
        canvas.set(2, 1, Color::rgba(10, 20, 30, 40)).unwrap();
        canvas
    }

    #[test]
    fn test_json_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/sample.json");
        let canvas = sample();

        save_json(&canvas, &path).unwrap();
        let loaded = load_json(&path).unwrap();
        assert_eq!(loaded, canvas);
    }

    #[test]
    fn test_json_document_shape() {
        let doc = CanvasDocument::from(&sample());
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["width"], 3);
        assert_eq!(value["height"], 2);
        assert_eq!(value["pixels"].as_array().unwrap().len(), 2);
        assert_eq!(value["pixels"][0][0], serde_json::json!({"r": 255, "g": 0, "b": 0, "a": 255}));
        assert_eq!(value["pixels"][1][2]["a"], 40);
    }

    #[test]
    fn test_png_export_matches_grid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.png");
        save_png(&sample(), &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(2, 1).0, [10, 20, 30, 40]);
        assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_rgba_image_keeps_every_pixel() {
        let mut canvas = Canvas::new(5, 3).unwrap();
        for y in 0..3 {
            for x in 0..5 {
                canvas.set(x, y, Color::rgba(x as u8, y as u8, 7, 100 + x as u8)).unwrap();
            }
        }

        let img = to_rgba_image(&canvas);
        assert_eq!(img.dimensions(), (5, 3));
        for (x, y, pixel) in img.enumerate_pixels() {
            assert_eq!(pixel.0, [x as u8, y as u8, 7, 100 + x as u8]);
        }
    }

    #[test]
    fn test_parse_document_missing_fields() {
        let err = parse_document(r#"{"height": 1, "pixels": [[]]}"#).unwrap_err();
        assert!(err.contains("width"));
        let err = parse_document(r#"{"width": 1, "pixels": [[]]}"#).unwrap_err();
        assert!(err.contains("height"));
        let err = parse_document(r#"{"width": 1, "height": 1}"#).unwrap_err();
        assert!(err.contains("pixels"));
    }

    #[test]
    fn test_parse_document_shape_mismatch() {
        let px = r#"{"r":0,"g":0,"b":0}"#;
        let rows = format!(r#"{{"width": 2, "height": 2, "pixels": [[{px},{px}]]}}"#);
        assert!(parse_document(&rows).unwrap_err().contains("rows"));

        let cols = format!(r#"{{"width": 2, "height": 1, "pixels": [[{px}]]}}"#);
        assert!(parse_document(&cols).unwrap_err().contains("row 0"));

        let zero = r#"{"width": 0, "height": 0, "pixels": []}"#;
        assert!(parse_document(zero).is_err());
    }

    #[test]
    fn test_parse_document_missing_alpha_is_opaque() {
        let doc = r#"{"width": 1, "height": 1, "pixels": [[{"r":1,"g":2,"b":3}]]}"#;
        let canvas = parse_document(doc).unwrap();
        assert_eq!(canvas.get(0, 0).unwrap(), Color::rgb(1, 2, 3));
    }

    #[test]
    fn test_load_errors_are_classified() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        assert_eq!(load_json(&missing).unwrap_err().kind(), ErrorKind::IoFailure);

        let garbage = dir.path().join("garbage.json");
        fs::write(&garbage, "not json").unwrap();
        assert_eq!(load_json(&garbage).unwrap_err().kind(), ErrorKind::InvalidFile);
    }

    #[test]
    fn test_save_format_parse() {
        assert_eq!("PNG".parse::<SaveFormat>().unwrap(), SaveFormat::Png);
        assert_eq!("json".parse::<SaveFormat>().unwrap(), SaveFormat::Json);
        assert!("gif".parse::<SaveFormat>().is_err());
        assert_eq!(SaveFormat::default(), SaveFormat::Png);
        assert_eq!(SaveFormat::from_path(Path::new("a/b.Json")), Some(SaveFormat::Json));
        assert_eq!(SaveFormat::from_path(Path::new("art.png")), Some(SaveFormat::Png));
        assert_eq!(SaveFormat::from_path(Path::new("art")), None);
    }
}
