//! Panel configuration
//!
//! Controller settings that depend on how the glass is mounted and driven.
//! Defaults match the reference panel; with the `serde` feature the
//! configuration can be loaded from TOML at build time.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::protocol::cmd;

/// Maximum length of the init command sequence
pub const MAX_INIT_COMMANDS: usize = 11;

/// Highest internal regulator resistor ratio
pub const MAX_REGULATOR_RATIO: u8 = 0x07;

/// Highest electronic volume (contrast) value
pub const MAX_CONTRAST: u8 = 0x3F;

/// COM (row) scan direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScanDirection {
    #[default]
    Normal,
    Reversed,
}

impl ScanDirection {
    const fn command(self) -> u8 {
        match self {
            ScanDirection::Normal => cmd::COM_SCAN_NORMAL,
            ScanDirection::Reversed => cmd::COM_SCAN_REVERSED,
        }
    }
}

/// SEG (column) output direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SegmentDirection {
    /// Power-on default; no command is sent
    #[default]
    Normal,
    Reversed,
}

/// LCD drive bias ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Bias {
    /// 1/9 bias
    #[default]
    OneNinth,
    /// 1/7 bias
    OneSeventh,
}

impl Bias {
    const fn command(self) -> u8 {
        match self {
            Bias::OneNinth => cmd::LCD_BIAS_1_9,
            Bias::OneSeventh => cmd::LCD_BIAS_1_7,
        }
    }
}

/// Controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelConfig {
    /// Row scan direction
    pub com_scan: ScanDirection,
    /// Column output direction
    pub segment_direction: SegmentDirection,
    /// Drive bias
    pub bias: Bias,
    /// Internal regulator resistor ratio (0-7)
    pub regulator_ratio: u8,
    /// Electronic volume (0-63)
    pub contrast: u8,
    /// Show the panel inverted (pixels on = light)
    pub inverted: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            com_scan: ScanDirection::Normal,
            segment_direction: SegmentDirection::Normal,
            bias: Bias::OneNinth,
            regulator_ratio: MAX_REGULATOR_RATIO,
            contrast: 0x0E,
            inverted: false,
        }
    }
}

impl PanelConfig {
    /// Command sequence that brings the controller from reset to display on
    ///
    /// Order: software reset, scan direction, bias, (segment direction),
    /// power control, normal/reverse, regulator ratio, electronic volume,
    /// display on, all-points off. Ratio and contrast are masked to their
    /// register width.
    pub fn init_commands(&self) -> Vec<u8, MAX_INIT_COMMANDS> {
        let segment_direction = match self.segment_direction {
            SegmentDirection::Normal => None,
            SegmentDirection::Reversed => Some(cmd::ADC_SELECT_REVERSE),
        };
        let display_mode = if self.inverted {
            cmd::DISPLAY_REVERSE
        } else {
            cmd::DISPLAY_NORMAL
        };

        [
            Some(cmd::RESET),
            Some(self.com_scan.command()),
            Some(self.bias.command()),
            segment_direction,
            Some(cmd::POWER_ALL_ON),
            Some(display_mode),
            Some(cmd::VOLTAGE_REGULATOR_BASE | (self.regulator_ratio & MAX_REGULATOR_RATIO)),
            Some(cmd::ELECTRONIC_VOLUME),
            Some(self.contrast & MAX_CONTRAST),
            Some(cmd::DISPLAY_ON),
            Some(cmd::ALL_POINTS_OFF),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
