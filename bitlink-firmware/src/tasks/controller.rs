//! Main controller task
//!
//! Owns the [`Device`] and handles one stimulus at a time. The handshake's
//! one second pause runs here, so stimuli arriving meanwhile wait in
//! [`STIMULUS_CHANNEL`] and are handled in order afterwards.

use defmt::*;
use embassy_nrf::buffered_uarte::BufferedUarteTx;
use embassy_time::Delay;

use bitlink_core::{Device, Dispatch, Outcome, Reception};
use bitlink_drivers::serial::LineWriter;

use crate::channels::STIMULUS_CHANNEL;
use crate::feedback::SignalFeedback;
use crate::identity;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(tx: BufferedUarteTx<'static>) {
    let config = identity::CONFIG;
    info!(
        "Controller task started: identity '{}', token {=str}, suffix {=str}, gate {:?}",
        identity::NAME,
        config.identity.token(),
        config.identity.event_suffix(),
        config.event_gate
    );

    let mut device = Device::new(config, LineWriter::new(tx), SignalFeedback, Delay);

    loop {
        let stimulus = STIMULUS_CHANNEL.receive().await;
        trace!("Stimulus: {:?}", stimulus);

        match device.handle(stimulus).await {
            Ok(Outcome::Line(Reception::Acknowledged)) => {
                info!("Handshake acknowledged, showing token");
            }
            Ok(Outcome::Line(Reception::Ignored)) => {
                trace!("Line ignored");
            }
            Ok(Outcome::Event(Dispatch::Sent)) => {
                debug!("Event sent");
            }
            Ok(Outcome::Event(Dispatch::Suppressed)) => {
                debug!("Event suppressed until handshake");
            }
            Err(e) => {
                warn!("Serial write failed: {:?}", Debug2Format(&e));
            }
        }
    }
}
