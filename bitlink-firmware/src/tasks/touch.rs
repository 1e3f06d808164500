//! Touch sampling task
//!
//! Polls the three ring pins and the capacitive logo every 10 ms.

use defmt::*;
use embassy_nrf::gpio::{Flex, Input, OutputDrive, Pull};
use embassy_time::{Duration, Instant, Ticker};

use bitlink_drivers::input::{CapacitiveFilter, ClickInput, ResistiveTouch};
use bitlink_protocol::InputEvent;

use crate::channels::send_event;

/// Sampling interval in milliseconds
pub const SAMPLE_INTERVAL_MS: u64 = 10;

/// Polling iterations before a charge measurement gives up
const CHARGE_TIMEOUT: u32 = 4_000;

/// Cycles the logo pad is held low before measuring (about 10 us at 64 MHz)
const DISCHARGE_CYCLES: u32 = 640;

/// Touch task - ring pins P0-P2 and the logo
#[embassy_executor::task]
pub async fn touch_task(ring: [Input<'static>; 3], mut logo: Flex<'static>) {
    info!("Touch task started");

    let [p0, p1, p2] = ring;
    let mut pads = [
        (ResistiveTouch::new(p0), ClickInput::new(InputEvent::TouchP0)),
        (ResistiveTouch::new(p1), ClickInput::new(InputEvent::TouchP1)),
        (ResistiveTouch::new(p2), ClickInput::new(InputEvent::TouchP2)),
    ];
    let mut logo_filter = CapacitiveFilter::default();
    let mut logo_click = ClickInput::new(InputEvent::LogoTouch);
    let mut calibrated = false;

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));
    let start = Instant::now();

    loop {
        ticker.next().await;
        let now_ms = start.elapsed().as_millis();

        for (pad, click) in &mut pads {
            let touched = pad.is_touched().unwrap_or(false);
            if let Some(event) = click.update(touched, now_ms) {
                debug!("Touch event: {:?}", event);
                send_event(event);
            }
        }

        let touched = logo_filter.update(measure_charge(&mut logo));
        if !calibrated && logo_filter.is_calibrated() {
            calibrated = true;
            info!("Logo calibrated, baseline {}", logo_filter.baseline());
        }
        if let Some(event) = logo_click.update(touched, now_ms) {
            debug!("Touch event: {:?}", event);
            send_event(event);
        }
    }
}

/// Discharge the logo pad and count how long it takes to read high again
fn measure_charge(pad: &mut Flex<'static>) -> u32 {
    pad.set_as_output(OutputDrive::Standard);
    pad.set_low();
    cortex_m::asm::delay(DISCHARGE_CYCLES);

    pad.set_as_input(Pull::Up);
    let mut count = 0;
    while pad.is_low() && count < CHARGE_TIMEOUT {
        count += 1;
    }
    count
}
