//! Event dispatch
//!
//! Every input event maps to exactly one outbound line: the event's base
//! text followed by the device's suffix. The mapping is a closed table, see
//! [`InputEvent::base_text`].

use bitlink_protocol::InputEvent;

use crate::config::{DeviceIdentity, EventGate};
use crate::state::HandshakeState;
use crate::traits::LineSink;

/// What the dispatcher did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// Message written to the link
    Sent,
    /// Event dropped by the event gate
    Suppressed,
}

/// Turns input events into serial messages
#[derive(Debug, Clone, Copy, Default)]
pub struct EventDispatcher {
    gate: EventGate,
}

impl EventDispatcher {
    /// Create a dispatcher with the given gating policy
    pub const fn new(gate: EventGate) -> Self {
        Self { gate }
    }

    /// Send the message for `event`
    ///
    /// With the default [`EventGate::Always`] the handshake state has no
    /// influence on what is sent.
    pub async fn dispatch<S: LineSink>(
        &self,
        event: InputEvent,
        identity: &DeviceIdentity,
        state: HandshakeState,
        sink: &mut S,
    ) -> Result<Dispatch, S::Error> {
        if !self.gate.allows(state) {
            return Ok(Dispatch::Suppressed);
        }

        let message = identity.event_message(event);
        sink.write_line(&message).await?;
        Ok(Dispatch::Sent)
    }
}
