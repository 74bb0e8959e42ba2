//! Seven-segment digit encoding
//!
//! Each digit lists the strokes to switch on and the strokes to switch
//! off. Both lists are written every time, so whatever the previous digit
//! left lit is overwritten.

use crate::icons::Segment::{self, A, B, C, D, E, F, G};

/// Number of digit positions on the clock
pub const DIGIT_POSITIONS: u8 = 4;

/// Address offset of each digit position relative to the first digit
const POSITION_OFFSETS: [u8; DIGIT_POSITIONS as usize] = [0, 7, 15, 22];

/// Strokes to turn on and off for one digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitPattern {
    /// Strokes lit for this digit, in write order
    pub on: &'static [Segment],
    /// Strokes dark for this digit, in write order
    pub off: &'static [Segment],
}

/// Patterns for digits 0-9
pub static DIGITS: [DigitPattern; 10] = [
    DigitPattern { on: &[A, F, E, D, C, B], off: &[G] },
    DigitPattern { on: &[C, B], off: &[A, F, G, E, D] },
    DigitPattern { on: &[A, G, E, D, B], off: &[F, C] },
    DigitPattern { on: &[A, G, D, C, B], off: &[F, E] },
    DigitPattern { on: &[F, G, C, B], off: &[A, E, D] },
    DigitPattern { on: &[A, F, G, D, C], off: &[E, B] },
    DigitPattern { on: &[A, F, G, E, D, C], off: &[B] },
    DigitPattern { on: &[A, C, B], off: &[F, G, E, D] },
    DigitPattern { on: &[A, F, G, E, D, C, B], off: &[] },
    DigitPattern { on: &[A, F, G, D, C, B], off: &[E] },
];

impl DigitPattern {
    /// Pattern for a decimal digit, `None` above 9
    pub fn for_digit(digit: u8) -> Option<&'static DigitPattern> {
        DIGITS.get(usize::from(digit))
    }

    /// Whether `segment` is lit by this pattern
    pub fn is_on(&self, segment: Segment) -> bool {
        self.on.contains(&segment)
    }
}

/// Digit position on the clock, 1 (leftmost) to 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitPosition(u8);

impl DigitPosition {
    /// Tens of the first pair
    pub const FIRST: Self = Self(1);
    /// Ones of the first pair
    pub const SECOND: Self = Self(2);
    /// Tens of the second pair
    pub const THIRD: Self = Self(3);
    /// Ones of the second pair
    pub const FOURTH: Self = Self(4);

    /// Position from a 1-based index, clamped into 1..=4
    pub const fn clamped(position: u8) -> Self {
        if position < 1 {
            Self(1)
        } else if position > DIGIT_POSITIONS {
            Self(DIGIT_POSITIONS)
        } else {
            Self(position)
        }
    }

    /// 1-based position index
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Column offset added to every stroke address
    pub const fn offset(self) -> u8 {
        POSITION_OFFSETS[(self.0 - 1) as usize]
    }

    /// Column address of `segment` at this position
    pub const fn address(self, segment: Segment) -> u8 {
        segment.address() + self.offset()
    }
}
