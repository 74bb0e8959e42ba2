//! Controller command set and write sequencing
//!
//! The controller auto-increments its column pointer only within a page,
//! so every page (and every icon column) is addressed explicitly before
//! its data bytes are sent.

use iconlcd_hal::DisplayBus;

use crate::framebuffer::{PixelBuffer, PAGES};
use crate::icons::ICON_PAGE;

/// Controller command bytes
pub mod cmd {
    pub const COLUMN_ADDRESS_LOWER: u8 = 0x00;
    pub const COLUMN_ADDRESS_UPPER: u8 = 0x10;
    pub const VOLTAGE_REGULATOR_BASE: u8 = 0x20;
    pub const POWER_CONTROL_BASE: u8 = 0x28;
    pub const POWER_BOOSTER_ON: u8 = POWER_CONTROL_BASE | 0x04;
    pub const POWER_REGULATOR_ON: u8 = POWER_CONTROL_BASE | 0x02;
    pub const POWER_FOLLOWER_ON: u8 = POWER_CONTROL_BASE | 0x01;
    pub const POWER_ALL_ON: u8 = POWER_BOOSTER_ON | POWER_REGULATOR_ON | POWER_FOLLOWER_ON;
    pub const DISPLAY_START_LINE: u8 = 0x40;
    pub const ELECTRONIC_VOLUME: u8 = 0x81;
    pub const ADC_SELECT_NORMAL: u8 = 0xA0;
    pub const ADC_SELECT_REVERSE: u8 = 0xA1;
    pub const LCD_BIAS_1_9: u8 = 0xA2;
    pub const LCD_BIAS_1_7: u8 = 0xA3;
    pub const ALL_POINTS_OFF: u8 = 0xA4;
    pub const ALL_POINTS_ON: u8 = 0xA5;
    pub const DISPLAY_NORMAL: u8 = 0xA6;
    pub const DISPLAY_REVERSE: u8 = 0xA7;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const ROW_ADDRESS_BASE: u8 = 0xB0;
    pub const COM_SCAN_NORMAL: u8 = 0xC8;
    pub const COM_SCAN_REVERSED: u8 = 0xC9;
    pub const RESET: u8 = 0xE2;
}

/// Page (row address) select command
pub const fn page_address(page: u8) -> u8 {
    cmd::ROW_ADDRESS_BASE | (page & 0x0F)
}

/// Column address as the low-nibble / high-nibble command pair
pub const fn column_address(column: u8) -> [u8; 2] {
    [
        cmd::COLUMN_ADDRESS_LOWER | (column & 0x0F),
        cmd::COLUMN_ADDRESS_UPPER | (column >> 4),
    ]
}

/// Send the whole framebuffer to the controller
///
/// For each page in ascending order: page select, column reset pair, then
/// one data byte per column in ascending order.
pub fn flush<B: DisplayBus>(buffer: &PixelBuffer, bus: &mut B) -> Result<(), B::Error> {
    for (page, columns) in (0..PAGES as u8).zip(buffer.pages()) {
        bus.send_command(page_address(page))?;
        bus.send_commands(&column_address(0))?;
        for &byte in columns {
            bus.send_data(byte)?;
        }
    }
    Ok(())
}

/// Write the state byte of one icon-bar column
pub fn write_icon<B: DisplayBus>(bus: &mut B, column: u8, state: u8) -> Result<(), B::Error> {
    bus.send_command(page_address(ICON_PAGE))?;
    bus.send_commands(&column_address(column))?;
    bus.send_data(state)
}
