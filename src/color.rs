//! Color parsing and the built-in named palette
//!
//! Supports the following input formats:
//! - Named: `red`, `blue`, `transparent`, ... (case-insensitive, see [`PALETTE`])
//! - Hex: `#RRGGBB` (alpha is always 255)
//! - Records: `{"r": 255, "g": 0, "b": 0, "a": 255}` passed through unchanged

use serde::{Deserialize, Serialize};

use crate::error::{CanvasError, Result};

/// A canonical 8-bit RGBA color.
///
/// Alpha is always materialized; input that omits it gets 255, so an explicit
/// opaque color and an implicit one always compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    /// Fully transparent black, the initial value of every canvas cell.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Opaque color from three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Render as `#rrggbb` (lowercase, alpha omitted).
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelpaint::color::Color;
    ///
    /// assert_eq!(Color::rgb(255, 165, 0).to_hex(), "#ffa500");
    /// ```
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channel sum used by the text preview to pick a glyph.
    pub fn channel_sum(&self) -> u32 {
        self.r as u32 + self.g as u32 + self.b as u32
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::TRANSPARENT
    }
}

/// The fixed named palette, in listing order.
///
/// `transparent` is the only entry with alpha below 255.
pub const PALETTE: [(&str, Color); 16] = [
    ("transparent", Color::TRANSPARENT),
    ("black", Color::rgb(0, 0, 0)),
    ("white", Color::rgb(255, 255, 255)),
    ("red", Color::rgb(255, 0, 0)),
    ("green", Color::rgb(0, 255, 0)),
    ("blue", Color::rgb(0, 0, 255)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("cyan", Color::rgb(0, 255, 255)),
    ("magenta", Color::rgb(255, 0, 255)),
    ("gray", Color::rgb(128, 128, 128)),
    ("darkgray", Color::rgb(64, 64, 64)),
    ("lightgray", Color::rgb(192, 192, 192)),
    ("orange", Color::rgb(255, 165, 0)),
    ("purple", Color::rgb(128, 0, 128)),
    ("brown", Color::rgb(165, 42, 42)),
    ("pink", Color::rgb(255, 192, 203)),
];

/// Look up a palette entry by its canonical lowercase name.
pub fn named(name: &str) -> Option<Color> {
    PALETTE.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
}

/// Iterate the palette in listing order.
pub fn palette() -> impl Iterator<Item = (&'static str, Color)> {
    PALETTE.iter().copied()
}

/// One line per palette entry: `name: #rrggbb`, plus the alpha when it
/// isn't opaque.
pub fn palette_listing() -> String {
    palette()
        .map(|(name, color)| {
            if color.a < 255 {
                format!("{}: {} (alpha: {})", name, color.to_hex(), color.a)
            } else {
                format!("{}: {}", name, color.to_hex())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Resolve a color string into a canonical [`Color`].
///
/// Palette names are matched case-insensitively; otherwise the input must be
/// `#` followed by exactly six hex digits.
///
/// # Examples
///
/// ```
/// use pixelpaint::color::{resolve, Color};
///
/// assert_eq!(resolve("Red").unwrap(), Color::rgb(255, 0, 0));
/// assert_eq!(resolve("#00FF00").unwrap(), Color::rgb(0, 255, 0));
/// assert!(resolve("rgb(0, 0, 0)").is_err());
/// ```
///
/// # Errors
///
/// Returns [`CanvasError::InvalidColor`] naming the input when it is neither.
pub fn resolve(input: &str) -> Result<Color> {
    if let Some(color) = named(&input.to_lowercase()) {
        return Ok(color);
    }

    if let Some(hex) = input.strip_prefix('#') {
        if let Some(color) = parse_hex(hex) {
            return Ok(color);
        }
    }

    Err(CanvasError::InvalidColor(input.to_string()))
}

/// Parse six hex digits (no leading `#`) into an opaque color.
pub fn parse_hex(hex: &str) -> Option<Color> {
    let bytes = hex.as_bytes();
    if bytes.len() != 6 {
        return None;
    }
    let r = parse_hex_pair(bytes[0], bytes[1])?;
    let g = parse_hex_pair(bytes[2], bytes[3])?;
    let b = parse_hex_pair(bytes[4], bytes[5])?;
    Some(Color::rgb(r, g, b))
}

/// Parse a single hex digit (0-9, A-F, a-f) to 0-15
fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn parse_hex_pair(high: u8, low: u8) -> Option<u8> {
    Some(parse_hex_digit(high)? * 16 + parse_hex_digit(low)?)
}

/// A color argument as callers supply it: a string to resolve, or a record
/// that is already canonical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum ColorInput {
    Text(String),
    Rgba(Color),
}

impl ColorInput {
    /// Resolve to a canonical color. Records pass through unchanged.
    pub fn resolve(&self) -> Result<Color> {
        match self {
            ColorInput::Text(s) => resolve(s),
            ColorInput::Rgba(c) => Ok(*c),
        }
    }
}

impl From<&str> for ColorInput {
    fn from(s: &str) -> Self {
        ColorInput::Text(s.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(s: String) -> Self {
        ColorInput::Text(s)
    }
}

impl From<Color> for ColorInput {
    fn from(c: Color) -> Self {
        ColorInput::Rgba(c)
    }
}

impl std::fmt::Display for ColorInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorInput::Text(s) => write!(f, "{}", s),
            ColorInput::Rgba(c) if c.a == 255 => write!(f, "{}", c.to_hex()),
            ColorInput::Rgba(c) => write!(f, "{} (alpha: {})", c.to_hex(), c.a),
        }
    }
}
