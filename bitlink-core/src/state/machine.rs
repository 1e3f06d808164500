//! Handshake latch definition

use bitlink_protocol::HostCommand;

/// Identification states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HandshakeState {
    /// No handshake received since power-on
    #[default]
    Unidentified,
    /// A host has identified this device
    Identified,
}

impl HandshakeState {
    /// Check if a handshake has completed
    pub fn is_identified(&self) -> bool {
        matches!(self, HandshakeState::Identified)
    }

    /// Process a host command and return the next state
    ///
    /// There is no transition out of `Identified`.
    pub fn transition(self, command: HostCommand) -> Self {
        use HandshakeState::*;
        use HostCommand::*;

        match (self, command) {
            (Unidentified, Identify) => Identified,
            (Identified, Identify) => Identified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(HandshakeState::default(), HandshakeState::Unidentified);
        assert!(!HandshakeState::default().is_identified());
    }

    #[test]
    fn test_identify_latches() {
        let state = HandshakeState::Unidentified;
        let next = state.transition(HostCommand::Identify);
        assert_eq!(next, HandshakeState::Identified);
        assert!(next.is_identified());
    }

    #[test]
    fn test_identified_stays_identified() {
        let state = HandshakeState::Identified;
        assert_eq!(
            state.transition(HostCommand::Identify),
            HandshakeState::Identified
        );
    }
}
