//! Handshake handler
//!
//! A host identifies a board by sending `test`. The board answers `OK`,
//! shows a tick for one second and then shows its token, so a person
//! looking at a row of boards can see which one the host is talking to.

use bitlink_protocol::{DeviceReply, HostCommand};
use embedded_hal_async::delay::DelayNs;

use crate::config::DeviceIdentity;
use crate::state::HandshakeState;
use crate::traits::{Feedback, Icon, LineSink};

/// How long the tick stays up before the token replaces it
pub const ACK_PAUSE_MS: u32 = 1000;

/// What the handler did with a received line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reception {
    /// Line was the handshake command and was acknowledged
    Acknowledged,
    /// Line was not addressed to this protocol and was dropped
    Ignored,
}

/// Owns the handshake latch and runs the acknowledgement sequence
#[derive(Debug, Clone, Default)]
pub struct Handshake {
    state: HandshakeState,
}

impl Handshake {
    /// Create an unidentified handshake
    pub const fn new() -> Self {
        Self {
            state: HandshakeState::Unidentified,
        }
    }

    /// Current latch state
    pub fn state(&self) -> HandshakeState {
        self.state
    }

    /// Handle one received line, delimiter already stripped
    ///
    /// Only the exact line `test` does anything, and it does the full
    /// sequence every time, also when already identified. The pause blocks
    /// the caller so nothing else runs between the tick and the token.
    ///
    /// A transport error on the `OK` write does not shorten the sequence;
    /// it is returned once the latch is set.
    pub async fn on_line_received<S, F, D>(
        &mut self,
        line: &str,
        identity: &DeviceIdentity,
        sink: &mut S,
        feedback: &mut F,
        delay: &mut D,
    ) -> Result<Reception, S::Error>
    where
        S: LineSink,
        F: Feedback,
        D: DelayNs,
    {
        let Some(command) = HostCommand::parse(line) else {
            return Ok(Reception::Ignored);
        };

        match command {
            HostCommand::Identify => {
                let written = sink.write_line(DeviceReply::Ack.as_str()).await;

                feedback.show_icon(Icon::Check);
                delay.delay_ms(ACK_PAUSE_MS).await;
                feedback.show_text(identity.token());

                self.state = self.state.transition(command);

                written.map(|()| Reception::Acknowledged)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PRIMARY, SECONDARY};
    use crate::mock::{collaborators, Entry, LinkDown};
    use embassy_futures::block_on;

    #[test]
    fn test_ack_sequence() {
        let (mut sink, mut feedback, mut delay, log) = collaborators();
        let mut handshake = Handshake::new();

        let result = block_on(handshake.on_line_received(
            "test",
            &PRIMARY,
            &mut sink,
            &mut feedback,
            &mut delay,
        ));

        assert_eq!(result, Ok(Reception::Acknowledged));
        assert_eq!(
            log.entries(),
            [
                Entry::Line("OK".into()),
                Entry::Icon(Icon::Check),
                Entry::Pause(ACK_PAUSE_MS),
                Entry::Text("1".into()),
            ]
        );
        assert_eq!(handshake.state(), HandshakeState::Identified);
    }

    #[test]
    fn test_token_comes_from_identity() {
        let (mut sink, mut feedback, mut delay, log) = collaborators();
        let mut handshake = Handshake::new();

        block_on(handshake.on_line_received(
            "test",
            &SECONDARY,
            &mut sink,
            &mut feedback,
            &mut delay,
        ))
        .unwrap();

        assert_eq!(log.outputs(), ["OK", "2"]);
    }

    #[test]
    fn test_near_misses_ignored() {
        let (mut sink, mut feedback, mut delay, log) = collaborators();
        let mut handshake = Handshake::new();

        for line in ["Test", "test ", "test\r", " test", "TEST", "OK", ""] {
            let result = block_on(handshake.on_line_received(
                line,
                &PRIMARY,
                &mut sink,
                &mut feedback,
                &mut delay,
            ));
            assert_eq!(result, Ok(Reception::Ignored), "line {:?}", line);
        }

        assert!(log.is_empty());
        assert_eq!(handshake.state(), HandshakeState::Unidentified);
    }

    #[test]
    fn test_write_failure_still_latches() {
        let (mut sink, mut feedback, mut delay, log) = collaborators();
        sink.fail = true;
        let mut handshake = Handshake::new();

        let result = block_on(handshake.on_line_received(
            "test",
            &PRIMARY,
            &mut sink,
            &mut feedback,
            &mut delay,
        ));

        assert_eq!(result, Err(LinkDown));
        assert_eq!(
            log.entries(),
            [
                Entry::Icon(Icon::Check),
                Entry::Pause(ACK_PAUSE_MS),
                Entry::Text("1".into()),
            ]
        );
        assert!(handshake.state().is_identified());
    }
}
