//! The pixel grid: a fixed-size, row-major array of RGBA cells
//!
//! Coordinates are signed at the public surface so that negative input is
//! reported as out of bounds rather than wrapping. (0, 0) is top-left.

use crate::color::{self, Color};
use crate::error::{CanvasError, Result};

/// Largest allowed width or height.
pub const MAX_DIMENSION: u32 = 1000;

/// An editable grid of colors.
///
/// Every in-range coordinate always holds a defined color; construction and
/// [`Canvas::clear`] initialize all cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    /// Row-major, indexed as `pixels[y * width + x]`.
    pixels: Vec<Color>,
}

/// Summary returned by [`Canvas::info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasInfo {
    pub width: u32,
    pub height: u32,
    /// Cells whose alpha is non-zero.
    pub painted: usize,
}

impl Canvas {
    /// Create a transparent canvas.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidDimensions`] if either side is 0 or
    /// exceeds [`MAX_DIMENSION`].
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_dimensions(width as i64, height as i64)?;
        Ok(Self::filled(width, height, Color::TRANSPARENT))
    }

    fn filled(width: u32, height: u32, color: Color) -> Self {
        Canvas { width, height, pixels: vec![color; width as usize * height as usize] }
    }

    /// Build a canvas from row-major rows taken as already canonical.
    ///
    /// Returns `None` when the rows don't form a `width x height` rectangle.
    pub fn from_rows(width: u32, height: u32, rows: Vec<Vec<Color>>) -> Option<Self> {
        if rows.len() != height as usize || rows.iter().any(|r| r.len() != width as usize) {
            return None;
        }
        let pixels = rows.into_iter().flatten().collect();
        Some(Canvas { width, height, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True if (x, y) addresses a cell.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && x < self.width as i64 && y >= 0 && y < self.height as i64
    }

    fn index(&self, x: i64, y: i64) -> Result<usize> {
        if !self.contains(x, y) {
            return Err(CanvasError::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    /// Get a copy of the color at (x, y).
    pub fn get(&self, x: i64, y: i64) -> Result<Color> {
        let i = self.index(x, y)?;
        Ok(self.pixels[i])
    }

    /// Store `color` at (x, y).
    pub fn set(&mut self, x: i64, y: i64, color: Color) -> Result<()> {
        let i = self.index(x, y)?;
        self.pixels[i] = color;
        Ok(())
    }

    /// Write `color` if (x, y) is in range; out-of-range cells are skipped.
    ///
    /// Multi-cell operations go through here so no single cell write can
    /// abort them halfway.
    pub(crate) fn plot(&mut self, x: i64, y: i64, color: Color) {
        if let Ok(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Resolve `color` and store it at (x, y).
    ///
    /// The color is resolved and the coordinate checked before anything is
    /// written, so a failure leaves the grid untouched.
    pub fn set_pixel(&mut self, x: i64, y: i64, color: &str) -> Result<Color> {
        let color = color::resolve(color)?;
        self.set(x, y, color)?;
        Ok(color)
    }

    /// Overwrite every cell with `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Row-major view of every cell.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.width as usize)
    }

    pub fn info(&self) -> CanvasInfo {
        CanvasInfo {
            width: self.width,
            height: self.height,
            painted: self.pixels.iter().filter(|c| c.a != 0).count(),
        }
    }
}

/// Validate requested canvas dimensions.
pub fn check_dimensions(width: i64, height: i64) -> Result<()> {
    check_dimensions_with_max(width, height, MAX_DIMENSION)
}

/// Validate dimensions against a configured maximum (never above [`MAX_DIMENSION`]).
pub fn check_dimensions_with_max(width: i64, height: i64, max: u32) -> Result<()> {
    let max = max.min(MAX_DIMENSION);
    let valid = |n: i64| n >= 1 && n <= max as i64;
    if !valid(width) || !valid(height) {
        return Err(CanvasError::InvalidDimensions { width, height, max });
    }
    Ok(())
}
