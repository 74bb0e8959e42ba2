//! Display facade
//!
//! Owns one bus and one framebuffer and exposes the whole drawing API.
//! Pixel and text operations only touch the framebuffer until
//! [`Display::update`] sends it; icon-bar operations are sent immediately.

use iconlcd_hal::DisplayBus;

use crate::config::PanelConfig;
use crate::framebuffer::PixelBuffer;
use crate::protocol;
use crate::status::StatusBar;
use crate::text;

/// Buffered display on top of a controller bus
pub struct Display<B> {
    bus: B,
    buffer: PixelBuffer,
}

impl<B: DisplayBus> Display<B> {
    /// Create a display with a cleared framebuffer
    ///
    /// Nothing is sent to the controller until [`Display::init`] or
    /// [`Display::update`].
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            buffer: PixelBuffer::new(),
        }
    }

    /// Send the init command sequence
    ///
    /// This does not drive the reset line or wait for the controller to
    /// settle; see the drivers crate for a timed bring-up.
    pub fn init(&mut self, config: &PanelConfig) -> Result<(), B::Error> {
        self.bus.send_commands(&config.init_commands())
    }

    /// Clear the framebuffer (the panel keeps its content until `update`)
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Set or clear one framebuffer pixel
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        self.buffer.set_pixel(x, y, on);
    }

    /// Read one framebuffer pixel
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        self.buffer.get_pixel(x, y)
    }

    /// Draw text into the framebuffer, returning the cursor after it
    pub fn print(&mut self, x: i32, y: i32, text: &str) -> i32 {
        text::draw_text(&mut self.buffer, x, y, text)
    }

    /// Send the whole framebuffer to the panel
    pub fn update(&mut self) -> Result<(), B::Error> {
        protocol::flush(&self.buffer, &mut self.bus)
    }

    /// Icon bar writer borrowing this display's bus
    pub fn status(&mut self) -> StatusBar<&mut B> {
        StatusBar::new(&mut self.bus)
    }

    /// Switch off every icon-bar column
    pub fn clear_icon_bar(&mut self) -> Result<(), B::Error> {
        self.status().clear()
    }

    /// The framebuffer
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// The framebuffer, mutably
    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    /// The underlying bus
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// The underlying bus, mutably
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Take the bus back, dropping the framebuffer
    pub fn release(self) -> B {
        self.bus
    }
}
