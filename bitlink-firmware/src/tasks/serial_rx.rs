//! Serial receive task
//!
//! Frames bytes from the host into lines and queues them for the controller.

use defmt::*;
use embassy_nrf::buffered_uarte::BufferedUarteRx;
use embassy_time::Timer;

use bitlink_core::Stimulus;
use bitlink_drivers::serial::{LineReader, ReadError};

use crate::channels::STIMULUS_CHANNEL;

/// Serial RX task - receives lines from the host
#[embassy_executor::task]
pub async fn serial_rx_task(rx: BufferedUarteRx<'static>) {
    info!("Serial RX task started");

    let mut reader = LineReader::new(rx);

    loop {
        match reader.read_line().await {
            Ok(line) => {
                debug!("RX line: {=str}", line.as_str());
                // Lines wait for the controller rather than being dropped
                STIMULUS_CHANNEL.send(Stimulus::Line(line)).await;
            }
            Err(ReadError::Framing(e)) => {
                warn!("Dropped malformed line: {:?}", e);
            }
            Err(ReadError::Io(e)) => {
                warn!("UART read error: {:?}", Debug2Format(&e));
            }
            Err(ReadError::Eof) => {
                Timer::after_millis(10).await;
            }
        }
    }
}
