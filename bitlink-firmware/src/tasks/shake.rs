//! Accelerometer sampling task
//!
//! Reads the LSM303AGR at its 50 Hz output rate and reports shakes.

use defmt::*;
use embassy_nrf::twim::Twim;
use embassy_time::{Duration, Ticker, Timer};

use bitlink_drivers::gesture::ShakeDetector;
use bitlink_drivers::sensor::Lsm303agr;
use bitlink_protocol::InputEvent;

use crate::channels::send_event;

/// Sampling interval in milliseconds (matches the 50 Hz output data rate)
pub const SAMPLE_INTERVAL_MS: u64 = 20;

/// Wait between initialization attempts
const INIT_RETRY_MS: u64 = 1000;

/// Consecutive read failures before the sensor is re-initialized
const MAX_READ_ERRORS: u8 = 10;

/// Shake task - owns the internal I2C bus
#[embassy_executor::task]
pub async fn shake_task(i2c: Twim<'static>) {
    info!("Shake task started");

    let mut accel = Lsm303agr::new(i2c);

    loop {
        match accel.init().await {
            Ok(()) => info!("LSM303AGR initialized"),
            Err(e) => {
                error!("LSM303AGR init failed: {:?}", Debug2Format(&e));
                Timer::after_millis(INIT_RETRY_MS).await;
                continue;
            }
        }

        let mut detector = ShakeDetector::default();
        let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));
        let mut errors = 0u8;

        while errors < MAX_READ_ERRORS {
            ticker.next().await;

            match accel.read().await {
                Ok(sample) => {
                    errors = 0;
                    trace!("Accel: {:?}", sample);
                    if detector.update(sample) {
                        debug!("Shake detected");
                        send_event(InputEvent::Shake);
                    }
                }
                Err(e) => {
                    errors += 1;
                    warn!("Accelerometer read failed: {:?}", Debug2Format(&e));
                }
            }
        }
        warn!("Too many accelerometer errors, re-initializing");
    }
}
