//! Panel walkthrough
//!
//! Steps through every icon-bar element, draws a few lines of text, then
//! keeps a counter running in the lower right of the framebuffer.

use core::fmt::Write;

use defmt::{warn, Format};
use embassy_time::Timer;
use heapless::String;
use iconlcd_core::status::{MAX_BATTERY_LEVEL, MAX_NETWORK_STATE, MAX_SIGNAL_LEVEL};
use iconlcd_core::{Display, WIDTH};
use iconlcd_hal::DisplayBus;

/// Delay between icon steps
const ICON_STEP_MS: u64 = 400;

/// Delay between clock and text steps
const FRAME_STEP_MS: u64 = 200;

/// Counter wraps to zero after this value
const COUNTER_MAX: u32 = 100;

/// Room for any `u32` counter value plus the padding
const COUNTER_TEXT_CAPACITY: usize = 16;
const _: () = assert!(COUNTER_TEXT_CAPACITY >= 10 + COUNTER_PADDING.len());

/// Blanks out digits left over from a wider number
const COUNTER_PADDING: &str = "    ";

/// Counter text origin
const COUNTER_X: i32 = WIDTH as i32 / 2;
const COUNTER_Y: i32 = 50;

/// Run the icon-bar and text walkthrough once
pub async fn intro<B>(display: &mut Display<B>) -> Result<(), B::Error>
where
    B: DisplayBus,
{
    display.clear_icon_bar()?;
    display.clear();
    display.update()?;

    for level in 0..=MAX_SIGNAL_LEVEL {
        display.status().signal(level)?;
        Timer::after_millis(ICON_STEP_MS).await;
    }

    display.status().bell(true)?;
    Timer::after_millis(ICON_STEP_MS).await;

    display.status().message(true)?;
    Timer::after_millis(ICON_STEP_MS).await;

    for state in 0..=MAX_NETWORK_STATE {
        display.status().network(state)?;
        Timer::after_millis(ICON_STEP_MS).await;
    }

    for level in 0..=MAX_BATTERY_LEVEL {
        display.status().battery(level)?;
        Timer::after_millis(ICON_STEP_MS).await;
    }

    for hours in 0..15u8 {
        display.status().clock(hours, 0, hours % 2 == 1)?;
        Timer::after_millis(FRAME_STEP_MS).await;
    }

    for step in 0..10u8 {
        display.status().clock(15, step * 11, step % 2 == 1)?;
        Timer::after_millis(FRAME_STEP_MS).await;
    }

    let lines: [(i32, i32, &str); 3] = [
        (WIDTH as i32 / 4, 1, "REZA-BAKHSHI"),
        (0, 20, "1234567890 abcdefghij"),
        (0, 30, "!@#$%^&*()_+=-[]{}<>?"),
    ];
    for (x, y, text) in lines {
        display.print(x, y, text);
        display.update()?;
        Timer::after_millis(FRAME_STEP_MS).await;
    }

    Ok(())
}

/// Redraw a wrapping counter forever
///
/// Bus errors are logged and the next frame is attempted anyway.
pub async fn count<B>(display: &mut Display<B>) -> !
where
    B: DisplayBus,
    B::Error: Format,
{
    let mut counter: u32 = 0;
    let mut text: String<COUNTER_TEXT_CAPACITY> = String::new();

    loop {
        if counter > COUNTER_MAX {
            counter = 0;
        }

        text.clear();
        if core::write!(text, "{}{}", counter, COUNTER_PADDING).is_err() {
            warn!("Counter text truncated: {}", text.as_str());
        }
        counter += 1;

        display.print(COUNTER_X, COUNTER_Y, &text);
        if let Err(e) = display.update() {
            warn!("Frame update failed: {}", e);
        }

        Timer::after_millis(FRAME_STEP_MS).await;
    }
}
