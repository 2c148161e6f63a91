//! Drawing operations on a [`Canvas`]: lines, rectangles, and flood fill.
//!
//! Every multi-cell operation writes through [`Canvas::plot`], which skips
//! coordinates outside the grid instead of failing. Only a direct
//! [`DrawOp::Set`] reports out-of-bounds coordinates.

use tracing::debug;

use crate::canvas::Canvas;
use crate::color::{Color, ColorInput};
use crate::error::Result;

/// A single drawing request, with its color still unresolved.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Set one pixel; fails outside the grid.
    Set { x: i64, y: i64, color: ColorInput },
    /// Bresenham line between two inclusive endpoints.
    Line { x1: i64, y1: i64, x2: i64, y2: i64, color: ColorInput },
    /// Rectangle with top-left corner (x, y).
    Rect { x: i64, y: i64, width: i64, height: i64, color: ColorInput, filled: bool },
    /// 4-connected fill starting at (x, y).
    Flood { x: i64, y: i64, color: ColorInput },
    /// Overwrite the whole canvas.
    Clear { color: ColorInput },
}

/// Rasterize a line using Bresenham's algorithm.
///
/// Yields the visited points lazily, in order from `p0` to `p1`, both
/// inclusive.
///
/// # Examples
///
/// ```
/// use pixelpaint::draw::rasterize_line;
///
/// let points: Vec<_> = rasterize_line((0, 0), (3, 0)).collect();
/// assert_eq!(points, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
///
/// assert_eq!(rasterize_line((2, 2), (2, 2)).collect::<Vec<_>>(), vec![(2, 2)]);
/// ```
pub fn rasterize_line(p0: (i64, i64), p1: (i64, i64)) -> LinePoints {
    LinePoints::new(p0, p1)
}

/// Iterator over the points of a Bresenham line.
///
/// Deltas and the error term are kept in 128-bit integers, so any pair of
/// `i64` endpoints walks without overflow.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i64,
    y: i64,
    end: (i64, i64),
    dx: i128,
    dy: i128,
    sx: i64,
    sy: i64,
    err: i128,
    done: bool,
}

impl LinePoints {
    pub fn new(p0: (i64, i64), p1: (i64, i64)) -> Self {
        Self::at_step(p0, p1, 0)
    }

    /// The walker as it stands after `step` moves along the major axis.
    ///
    /// After `k` major steps the minor axis has moved
    /// `ceil((2·k·minor − major) / (2·major))` times, clamped at zero. The
    /// product is split into quotient and remainder so it stays in `u128`.
    fn at_step(p0: (i64, i64), p1: (i64, i64), step: u128) -> Self {
        let dx = p0.0.abs_diff(p1.0) as u128;
        let dy = p0.1.abs_diff(p1.1) as u128;
        let x_major = dx >= dy;
        let (major, minor) = if x_major { (dx, dy) } else { (dy, dx) };

        let (minor_steps, drift) = if major == 0 {
            (0, 0)
        } else {
            let product = step * minor;
            let (q, r) = (product / major, product % major);
            let carry = (2 * r + major - 1) / (2 * major);
            // err = dx - dy + (y_steps * dx - x_steps * dy)
            let drift = carry as i128 * major as i128 - r as i128;
            (q + carry, if x_major { drift } else { -drift })
        };
        let (x_steps, y_steps) = if x_major { (step, minor_steps) } else { (minor_steps, step) };

        let sx: i64 = if p0.0 < p1.0 { 1 } else { -1 };
        let sy: i64 = if p0.1 < p1.1 { 1 } else { -1 };
        LinePoints {
            x: (p0.0 as i128 + sx as i128 * x_steps as i128) as i64,
            y: (p0.1 as i128 + sy as i128 * y_steps as i128) as i64,
            end: p1,
            dx: dx as i128,
            dy: dy as i128,
            sx,
            sy,
            err: dx as i128 - dy as i128 + drift,
            done: false,
        }
    }
}

impl Iterator for LinePoints {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let point = (self.x, self.y);
        if point == self.end {
            self.done = true;
            return Some(point);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(point)
    }
}

/// Major-axis steps of the line that can land inside a `width x height`
/// grid, as an inclusive range.
fn visible_steps(p0: (i64, i64), p1: (i64, i64), width: u32, height: u32) -> Option<(u128, u128)> {
    let dx = p0.0.abs_diff(p1.0);
    let dy = p0.1.abs_diff(p1.1);
    let (start, end, limit, major) =
        if dx >= dy { (p0.0, p1.0, width, dx) } else { (p0.1, p1.1, height, dy) };

    let (start, limit) = (start as i128, limit as i128);
    let (lo, hi) = if start <= end as i128 {
        (-start, limit - 1 - start)
    } else {
        (start - (limit - 1), start)
    };
    let (lo, hi) = (lo.max(0), hi.min(major as i128));
    (lo <= hi).then_some((lo as u128, hi as u128))
}

impl Canvas {
    /// Draw a line from (x1, y1) to (x2, y2). Returns the number of cells
    /// written.
    ///
    /// The walk starts where the line first reaches the grid's columns (or
    /// rows, for steep lines), so the work is bounded by the canvas size
    /// rather than by the endpoints.
    pub fn draw_line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, color: Color) -> usize {
        let (p0, p1) = ((x1, y1), (x2, y2));
        let Some((first, last)) = visible_steps(p0, p1, self.width(), self.height()) else {
            return 0;
        };

        let mut written = 0;
        for (x, y) in LinePoints::at_step(p0, p1, first).take((last - first + 1) as usize) {
            if self.contains(x, y) {
                self.plot(x, y, color);
                written += 1;
            }
        }
        written
    }

    /// Draw a rectangle covering `[x, x + width) x [y, y + height)`.
    ///
    /// An outline is four inclusive lines (top, left, right, bottom) between
    /// the corners `(x, y)` and `(x + width - 1, y + height - 1)`, so the
    /// corners are written twice. A non-positive size inverts those corners
    /// for an outline and draws nothing when filled.
    pub fn draw_rect(
        &mut self,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        color: Color,
        filled: bool,
    ) -> usize {
        if filled {
            if width <= 0 || height <= 0 {
                return 0;
            }
            let x_end = x.saturating_add(width).min(self.width() as i64);
            let y_end = y.saturating_add(height).min(self.height() as i64);
            let mut written = 0;
            for py in y.max(0)..y_end {
                for px in x.max(0)..x_end {
                    self.plot(px, py, color);
                    written += 1;
                }
            }
            return written;
        }

        let right = x.saturating_add(width).saturating_sub(1);
        let bottom = y.saturating_add(height).saturating_sub(1);
        self.draw_line(x, y, right, y, color)
            + self.draw_line(x, y, x, bottom, color)
            + self.draw_line(right, y, right, bottom, color)
            + self.draw_line(x, bottom, right, bottom, color)
    }

    /// Replace the 4-connected region sharing the color at (x, y).
    ///
    /// Uses an explicit heap-allocated stack, so region size never affects
    /// call depth. A start outside the grid, or a region already `color`, is
    /// a no-op. Returns the number of cells filled.
    pub fn flood_fill(&mut self, x: i64, y: i64, color: Color) -> usize {
        let Ok(target) = self.get(x, y) else {
            return 0;
        };
        if target == color {
            return 0;
        }

        let mut filled = 0;
        let mut stack = vec![(x, y)];
        while let Some((cx, cy)) = stack.pop() {
            match self.get(cx, cy) {
                Ok(current) if current == target => {}
                _ => continue,
            }
            self.plot(cx, cy, color);
            filled += 1;

            stack.push((cx + 1, cy));
            stack.push((cx - 1, cy));
            stack.push((cx, cy + 1));
            stack.push((cx, cy - 1));
        }

        filled
    }

    /// Resolve the operation's color once and apply it. Returns the number
    /// of cells written.
    pub fn apply(&mut self, op: &DrawOp) -> Result<usize> {
        let written = match op {
            DrawOp::Set { x, y, color } => {
                let color = color.resolve()?;
                self.set(*x, *y, color)?;
                1
            }
            DrawOp::Line { x1, y1, x2, y2, color } => {
                let color = color.resolve()?;
                self.draw_line(*x1, *y1, *x2, *y2, color)
            }
            DrawOp::Rect { x, y, width, height, color, filled } => {
                let color = color.resolve()?;
                self.draw_rect(*x, *y, *width, *height, color, *filled)
            }
            DrawOp::Flood { x, y, color } => {
                if !self.contains(*x, *y) {
                    return Ok(0);
                }
                let color = color.resolve()?;
                self.flood_fill(*x, *y, color)
            }
            DrawOp::Clear { color } => {
                let color = color.resolve()?;
                self.clear(color);
                self.pixels().len()
            }
        };
        debug!(?op, written, "applied draw op");
        Ok(written)
    }
}
