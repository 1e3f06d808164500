//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Every producer feeds the one stimulus channel so the controller sees
//! lines and input events in arrival order.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use bitlink_core::Stimulus;
use bitlink_display::DisplayCommand;
use bitlink_protocol::InputEvent;

/// Channel capacity for stimuli waiting on the controller
const STIMULUS_CHANNEL_SIZE: usize = 16;

/// Received lines and input events, consumed by the controller
pub static STIMULUS_CHANNEL: Channel<CriticalSectionRawMutex, Stimulus, STIMULUS_CHANNEL_SIZE> =
    Channel::new();

/// Latest display content requested by the controller
pub static DISPLAY_CMD: Signal<CriticalSectionRawMutex, DisplayCommand> = Signal::new();

/// Queue an input event for the controller, dropping it if the queue is full
pub fn send_event(event: InputEvent) {
    if STIMULUS_CHANNEL.try_send(Stimulus::Event(event)).is_err() {
        defmt::warn!("Stimulus channel full, dropping {:?}", event);
    }
}
