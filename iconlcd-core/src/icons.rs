//! Icon bar address map
//!
//! The icon bar is a ninth page below the pixel area. It is not part of the
//! framebuffer; each icon is one column of that page, switched by writing
//! a data byte to its column address.

/// Page address of the icon bar
pub const ICON_PAGE: u8 = 8;

/// Number of signal strength bars (contiguous from [`Icon::Signal`])
pub const SIGNAL_BARS: u8 = 5;

/// Number of battery segments (contiguous from [`Icon::Battery`])
pub const BATTERY_SEGMENTS: u8 = 4;

/// Column of the clock separator (colon)
pub const SEPARATOR: u8 = 110;

/// Status icons and the first column of multi-column groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Icon {
    /// First of the signal strength bars (13-17)
    Signal = 13,
    /// Bell
    Bell = 31,
    /// Message envelope
    Message = 46,
    /// Data receive arrow
    DataReceive = 59,
    /// Data send arrow
    DataSend = 69,
    /// Battery outline, first of the battery segments (92-95)
    Battery = 92,
}

impl Icon {
    /// Column address on the icon page
    pub const fn address(self) -> u8 {
        self as u8
    }
}

/// Seven-segment strokes of the first clock digit
///
/// The other digits use the same layout shifted by a per-position offset
/// (see [`crate::segments::DigitPosition`]). The panel wires the strokes
/// out of alphabetical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Segment {
    A = 96,
    B = 102,
    C = 101,
    D = 100,
    E = 99,
    F = 97,
    G = 98,
}

impl Segment {
    /// All segments, A through G
    pub const ALL: [Segment; 7] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
    ];

    /// Column address of this stroke for the first digit
    pub const fn address(self) -> u8 {
        self as u8
    }
}
