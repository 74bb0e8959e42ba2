//! iconlcd Hardware Abstraction Layer
//!
//! This crate defines the single seam between the display logic and the
//! physical transport. The controller only understands two kinds of
//! writes, distinguished by its A0 line: command bytes and data bytes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (iconlcd-firmware, etc.)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  iconlcd-core (framebuffer, icon bar)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  iconlcd-hal (this crate - DisplayBus)  │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ ParallelBus   │       │ RecordingBus  │
//! │ (drivers)     │       │ (mock, tests) │
//! └───────────────┘       └───────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export key traits at crate root for convenience
pub use bus::DisplayBus;
