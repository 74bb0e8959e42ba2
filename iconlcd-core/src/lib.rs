//! Board-agnostic display logic for 132x64 icon-bar LCDs
//!
//! This crate contains everything that does not depend on how bytes reach
//! the controller:
//!
//! - Packed page-addressed framebuffer
//! - 5x8 font and text rasterizer
//! - Icon-bar address tables and seven-segment digit encoding
//! - Status bar operations (signal, bell, message, network, battery, clock)
//! - Frame update and icon write command sequencing
//! - Panel configuration and init command sequence
//!
//! All transport access goes through [`iconlcd_hal::DisplayBus`].

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod display;
pub mod font;
pub mod framebuffer;
pub mod icons;
pub mod protocol;
pub mod segments;
pub mod status;
pub mod text;

pub use config::PanelConfig;
pub use display::Display;
pub use framebuffer::{PixelBuffer, HEIGHT, PAGES, WIDTH};
pub use status::StatusBar;
