//! LED matrix refresh task
//!
//! Multiplexes the matrix one row every 2 ms and applies display commands
//! from the controller as they arrive. Scrolling advances here, so the
//! controller never waits on the display.

use defmt::*;
use embassy_nrf::gpio::Output;
use embassy_time::{Duration, Instant, Ticker};

use bitlink_display::{LedMatrix, Screen};

use crate::channels::DISPLAY_CMD;

/// Time each row stays lit
pub const ROW_PERIOD_MS: u64 = 2;

/// Display task - owns the LED matrix pins
#[embassy_executor::task]
pub async fn display_task(mut matrix: LedMatrix<Output<'static>>) {
    info!("Display task started");

    let mut screen = Screen::new();
    let mut ticker = Ticker::every(Duration::from_millis(ROW_PERIOD_MS));
    let start = Instant::now();

    // GPIO writes on this chip cannot fail
    let _ = matrix.blank();

    loop {
        let now_ms = start.elapsed().as_millis();

        if let Some(command) = DISPLAY_CMD.try_take() {
            debug!("Display: {:?}", command);
            screen.apply(&command, now_ms);
        }
        screen.tick(now_ms);

        let _ = matrix.scan_row(screen.frame());
        ticker.next().await;
    }
}
