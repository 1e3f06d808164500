//! Complete device configuration

use super::identity::DeviceIdentity;
use crate::state::HandshakeState;

/// Whether event messages wait for the handshake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventGate {
    /// Send event messages in every state
    ///
    /// The host discards messages from boards it has not identified yet.
    #[default]
    Always,
    /// Drop event messages until the first handshake
    AfterHandshake,
}

impl EventGate {
    /// Check if events may be sent in `state`
    pub fn allows(self, state: HandshakeState) -> bool {
        match self {
            EventGate::Always => true,
            EventGate::AfterHandshake => state.is_identified(),
        }
    }
}

/// Configuration compiled into a firmware image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceConfig {
    /// Identity of this device
    pub identity: DeviceIdentity,
    /// Event gating policy
    pub event_gate: EventGate,
}

impl DeviceConfig {
    /// Configuration with the default (ungated) event policy
    pub const fn new(identity: DeviceIdentity) -> Self {
        Self {
            identity,
            event_gate: EventGate::Always,
        }
    }

    /// Replace the event gating policy
    pub const fn with_event_gate(mut self, event_gate: EventGate) -> Self {
        self.event_gate = event_gate;
        self
    }
}
