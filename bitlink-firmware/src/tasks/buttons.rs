//! Button sampling task
//!
//! Samples buttons A and B every 10 ms and reports A, B and A+B clicks.

use defmt::*;
use embassy_nrf::gpio::Input;
use embassy_time::{Duration, Instant, Ticker};

use bitlink_drivers::input::ButtonPair;

use crate::channels::send_event;

/// Sampling interval in milliseconds
pub const SAMPLE_INTERVAL_MS: u64 = 10;

/// Buttons task - debounces both buttons and detects the A+B chord
#[embassy_executor::task]
pub async fn buttons_task(button_a: Input<'static>, button_b: Input<'static>) {
    info!("Buttons task started");

    let mut buttons = ButtonPair::new();
    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));
    let start = Instant::now();

    loop {
        ticker.next().await;
        let now_ms = start.elapsed().as_millis();

        // Buttons pull to GND when pressed
        if let Some(event) = buttons.update(button_a.is_low(), button_b.is_low(), now_ms) {
            debug!("Button event: {:?}", event);
            send_event(event);
        }
    }
}
