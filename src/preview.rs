//! Text preview of a canvas for quick inspection

use crate::canvas::Canvas;

/// Preview width in cells; wider canvases are truncated.
pub const PREVIEW_COLS: u32 = 32;
/// Preview height in cells; taller canvases are truncated.
pub const PREVIEW_ROWS: u32 = 16;

/// Glyph for cells with alpha 0
pub const GLYPH_EMPTY: char = ' ';
/// Glyph for dark cells (r + g + b < 384)
pub const GLYPH_DARK: char = '█';
/// Glyph for light cells
pub const GLYPH_LIGHT: char = '░';

/// Render the top-left 32x16 cells, one line per row, each line ending in
/// a newline, under a `Canvas WxH:` header.
///
/// # Examples
///
/// ```
/// use pixelpaint::canvas::Canvas;
/// use pixelpaint::preview::render_preview;
///
/// let mut canvas = Canvas::new(3, 1).unwrap();
/// canvas.set_pixel(0, 0, "black").unwrap();
/// canvas.set_pixel(2, 0, "white").unwrap();
/// assert_eq!(render_preview(&canvas), "Canvas 3x1:\n█ ░\n");
/// ```
pub fn render_preview(canvas: &Canvas) -> String {
    let mut out = format!("Canvas {}x{}:\n", canvas.width(), canvas.height());
    for row in canvas.rows().take(PREVIEW_ROWS as usize) {
        out.extend(row.iter().take(PREVIEW_COLS as usize).map(|c| {
            if c.a == 0 {
                GLYPH_EMPTY
            } else if c.channel_sum() < 384 {
                GLYPH_DARK
            } else {
                GLYPH_LIGHT
            }
        }));
        out.push('\n');
    }
    out
}
