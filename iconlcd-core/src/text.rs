//! Text rasterizer
//!
//! Draws 5x8 glyphs into a [`PixelBuffer`] at arbitrary pixel positions.
//! There is no wrapping: anything past the panel edge is clipped pixel by
//! pixel.

use crate::font::{glyph, is_printable, FONT_H, FONT_W};
use crate::framebuffer::PixelBuffer;

/// Blank column after every glyph except the space
pub const CHAR_SPACING: i32 = 1;

/// Horizontal advance for one character code
///
/// Non-printable codes do not move the cursor. The space glyph is already
/// blank, so it gets no extra spacing column.
pub const fn advance(code: u8) -> i32 {
    if !is_printable(code) {
        0
    } else if code == b' ' {
        FONT_W as i32
    } else {
        FONT_W as i32 + CHAR_SPACING
    }
}

/// Draw `text` with its top-left corner at `(x, y)`
///
/// Glyph pixels are written both on and off, so text replaces whatever was
/// underneath its 5x8 cells. Bytes outside 32..=127 (control codes, UTF-8
/// continuation bytes) are skipped.
///
/// Returns the x coordinate where the next character would start.
pub fn draw_text(buffer: &mut PixelBuffer, x: i32, y: i32, text: &str) -> i32 {
    let mut cursor = x;

    for code in text.bytes() {
        let Some(columns) = glyph(code) else {
            continue;
        };

        for (col, &bits) in columns.iter().enumerate() {
            let px = cursor.saturating_add(col as i32);
            for row in 0..FONT_H {
                buffer.set_pixel(px, y.saturating_add(row as i32), bits & (1 << row) != 0);
            }
        }

        cursor = cursor.saturating_add(advance(code));
    }

    cursor
}

/// Width in pixels that [`draw_text`] advances for `text`
pub fn text_width(text: &str) -> i32 {
    text.bytes()
        .fold(0i32, |width, code| width.saturating_add(advance(code)))
}
