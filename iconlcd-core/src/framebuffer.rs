//! Page-addressed framebuffer
//!
//! The controller stores pixels as pages: each page is a band of 8 rows,
//! and each byte in a page is one column of that band with bit `b` at row
//! `page * 8 + b`. The buffer mirrors that layout so a frame update is a
//! straight copy.

/// Display width in pixels (columns)
pub const WIDTH: usize = 132;

/// Display height in pixels (rows)
pub const HEIGHT: usize = 64;

/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;

/// Total buffer size in bytes
pub const BUFFER_SIZE: usize = WIDTH * PAGES;

/// Packed 1-bit framebuffer
///
/// Coordinates are signed so callers can position text partly off-screen;
/// anything outside the panel is dropped without touching the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Page-major bytes: `bytes[page * WIDTH + column]`
    bytes: [u8; BUFFER_SIZE],
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelBuffer {
    /// Create a cleared buffer
    pub const fn new() -> Self {
        Self {
            bytes: [0; BUFFER_SIZE],
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Set or clear one pixel
    ///
    /// Out-of-range coordinates are a no-op.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if let Some((index, mask)) = locate(x, y) {
            if on {
                self.bytes[index] |= mask;
            } else {
                self.bytes[index] &= !mask;
            }
        }
    }

    /// Read one pixel (`false` outside the panel)
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        locate(x, y).is_some_and(|(index, mask)| self.bytes[index] & mask != 0)
    }

    /// Raw byte for one column of one page (`0` outside the panel)
    pub fn read_page_row(&self, page: usize, col: usize) -> u8 {
        if page < PAGES && col < WIDTH {
            self.bytes[page * WIDTH + col]
        } else {
            0
        }
    }

    /// All columns of one page
    pub fn page(&self, page: usize) -> Option<&[u8; WIDTH]> {
        if page >= PAGES {
            return None;
        }
        self.bytes[page * WIDTH..(page + 1) * WIDTH].try_into().ok()
    }

    /// Iterate pages in ascending order
    pub fn pages(&self) -> impl Iterator<Item = &[u8]> {
        self.bytes.chunks_exact(WIDTH)
    }

    /// The whole buffer in transmission order
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whether every pixel is off
    pub fn is_blank(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }
}

/// Byte index and bit mask for a pixel, if it is on the panel
fn locate(x: i32, y: i32) -> Option<(usize, u8)> {
    let x = usize::try_from(x).ok().filter(|&x| x < WIDTH)?;
    let y = usize::try_from(y).ok().filter(|&y| y < HEIGHT)?;
    Some(((y / 8) * WIDTH + x, 1 << (y % 8)))
}
