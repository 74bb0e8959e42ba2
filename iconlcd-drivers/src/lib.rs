//! Hardware drivers for iconlcd panels
//!
//! This crate binds the board-agnostic logic in iconlcd-core to real pins:
//!
//! - [`parallel::ParallelBus`]: 8080-style write-only bus on GPIO
//! - [`controller::Controller`]: reset pulse and timed init sequence

#![no_std]
#![deny(unsafe_code)]

pub mod controller;
pub mod parallel;

pub use controller::{Controller, InitError};
pub use parallel::{BusError, Line, ParallelBus};
