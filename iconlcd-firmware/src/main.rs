//! iconlcd demo firmware
//!
//! Drives a 132x64 icon-bar LCD from an RP2040 over an 8080-style
//! parallel bus, walks through every icon, then runs a counter.
//!
//! Wiring:
//!
//! | Signal | Pin          |
//! |--------|--------------|
//! | D0..D7 | GPIO0..GPIO7 |
//! | RST    | GPIO8        |
//! | CS     | GPIO9        |
//! | A0     | GPIO10       |
//! | WR     | GPIO11       |
//! | RD     | GPIO12       |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use iconlcd_drivers::{Controller, ParallelBus};

mod config;
mod demo;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("iconlcd firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let panel = config::load();

    let data = [
        Output::new(p.PIN_0, Level::Low),
        Output::new(p.PIN_1, Level::Low),
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        Output::new(p.PIN_4, Level::Low),
        Output::new(p.PIN_5, Level::Low),
        Output::new(p.PIN_6, Level::Low),
        Output::new(p.PIN_7, Level::Low),
    ];
    let rst = Output::new(p.PIN_8, Level::High);
    let cs = Output::new(p.PIN_9, Level::High);
    let a0 = Output::new(p.PIN_10, Level::High);
    let wr = Output::new(p.PIN_11, Level::High);
    let rd = Output::new(p.PIN_12, Level::High);

    let bus = match ParallelBus::new(cs, a0, wr, rd, data) {
        Ok(bus) => bus,
        Err(e) => halt("Parallel bus setup failed", e).await,
    };

    let mut controller = Controller::new(bus, rst);
    if let Err(e) = controller.init(&mut Delay, &panel) {
        halt("Panel init failed", e).await;
    }
    info!("Panel initialized");

    // The reset line stays driven high for as long as the panel is in use
    let (mut display, _rst) = controller.into_display();

    if let Err(e) = demo::intro(&mut display).await {
        error!("Walkthrough aborted: {}", e);
    }

    info!("Entering counter loop");
    demo::count(&mut display).await
}

/// Log a fatal bring-up error and park the core
async fn halt<E: Format>(context: &str, error: E) -> ! {
    error!("{}: {}", context, error);
    loop {
        Timer::after_secs(1).await;
    }
}
