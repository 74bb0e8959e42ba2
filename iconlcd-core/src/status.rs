//! Status bar encoder
//!
//! Turns high-level status (signal level, battery level, clock time) into
//! single-column icon writes. Icon writes go straight to the bus; the
//! icon page is not buffered.

use iconlcd_hal::DisplayBus;

use crate::framebuffer::WIDTH;
use crate::icons::{Icon, BATTERY_SEGMENTS, SEPARATOR, SIGNAL_BARS};
use crate::protocol::write_icon;
use crate::segments::{DigitPattern, DigitPosition};

/// Highest signal level (all bars lit)
pub const MAX_SIGNAL_LEVEL: u8 = SIGNAL_BARS;

/// Highest network state (send and receive)
pub const MAX_NETWORK_STATE: u8 = 3;

/// Highest battery level (full)
pub const MAX_BATTERY_LEVEL: u8 = 3;

/// Highest value of one two-digit clock group
pub const MAX_CLOCK_VALUE: u8 = 99;

/// Network state bit: data being received
pub const NETWORK_RECEIVE: u8 = 0b01;

/// Network state bit: data being sent
pub const NETWORK_SEND: u8 = 0b10;

/// Battery segments as (address offset, level needed to light it)
///
/// The outline is always lit. The fill segments are wired so the third
/// one sits at offset 3 and the fourth at offset 2.
const BATTERY_LAYOUT: [(u8, u8); BATTERY_SEGMENTS as usize] = [(0, 0), (1, 1), (3, 2), (2, 3)];

/// Icon state byte for on/off
const fn icon_state(on: bool) -> u8 {
    if on {
        1
    } else {
        0
    }
}

/// Icon bar writer
///
/// Wraps a bus (or `&mut` bus) and exposes one method per status element.
/// Out-of-range levels are clamped to the highest valid level.
pub struct StatusBar<B> {
    bus: B,
}

impl<B: DisplayBus> StatusBar<B> {
    /// Create a status bar writer on top of a bus
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Give back the underlying bus
    pub fn into_inner(self) -> B {
        self.bus
    }

    /// Switch a single icon-bar column on or off
    pub fn icon(&mut self, column: u8, on: bool) -> Result<(), B::Error> {
        write_icon(&mut self.bus, column, icon_state(on))
    }

    /// Show signal strength 0-5
    pub fn signal(&mut self, level: u8) -> Result<(), B::Error> {
        let level = level.min(MAX_SIGNAL_LEVEL);

        for bar in 0..SIGNAL_BARS {
            self.icon(Icon::Signal.address() + bar, bar < level)?;
        }
        Ok(())
    }

    /// Show or hide the bell
    pub fn bell(&mut self, on: bool) -> Result<(), B::Error> {
        self.icon(Icon::Bell.address(), on)
    }

    /// Show or hide the message envelope
    pub fn message(&mut self, on: bool) -> Result<(), B::Error> {
        self.icon(Icon::Message.address(), on)
    }

    /// Show network activity
    ///
    /// `state` is a 2-bit field: bit 0 = receiving, bit 1 = sending
    /// (0 idle, 1 receive, 2 send, 3 both).
    pub fn network(&mut self, state: u8) -> Result<(), B::Error> {
        let state = state.min(MAX_NETWORK_STATE);

        self.icon(Icon::DataReceive.address(), state & NETWORK_RECEIVE != 0)?;
        self.icon(Icon::DataSend.address(), state & NETWORK_SEND != 0)
    }

    /// Show battery level 0 (empty) to 3 (full)
    pub fn battery(&mut self, level: u8) -> Result<(), B::Error> {
        let level = level.min(MAX_BATTERY_LEVEL);

        for (offset, threshold) in BATTERY_LAYOUT {
            self.icon(Icon::Battery.address() + offset, level >= threshold)?;
        }
        Ok(())
    }

    /// Draw one seven-segment digit at a clock position 1-4
    ///
    /// The position is clamped into 1..=4. `digit` must be 0-9; larger
    /// values trip a debug assertion and draw nothing in release builds.
    pub fn render_digit(&mut self, digit: u8, position: u8) -> Result<(), B::Error> {
        debug_assert!(digit <= 9, "seven-segment digit out of range: {}", digit);

        let position = DigitPosition::clamped(position);
        let Some(pattern) = DigitPattern::for_digit(digit) else {
            return Ok(());
        };

        for &segment in pattern.on {
            self.icon(position.address(segment), true)?;
        }
        for &segment in pattern.off {
            self.icon(position.address(segment), false)?;
        }
        Ok(())
    }

    /// Show two two-digit groups and the separator (e.g. hours:minutes)
    ///
    /// Each group is clamped to 0-99.
    pub fn clock(&mut self, segment_1: u8, segment_2: u8, separator: bool) -> Result<(), B::Error> {
        let segment_1 = segment_1.min(MAX_CLOCK_VALUE);
        let segment_2 = segment_2.min(MAX_CLOCK_VALUE);

        self.render_digit(segment_1 / 10, DigitPosition::FIRST.get())?;
        self.render_digit(segment_1 % 10, DigitPosition::SECOND.get())?;
        self.render_digit(segment_2 / 10, DigitPosition::THIRD.get())?;
        self.render_digit(segment_2 % 10, DigitPosition::FOURTH.get())?;
        self.icon(SEPARATOR, separator)
    }

    /// Switch off every column of the icon page
    pub fn clear(&mut self) -> Result<(), B::Error> {
        for column in 0..WIDTH as u8 {
            write_icon(&mut self.bus, column, 0)?;
        }
        Ok(())
    }
}
