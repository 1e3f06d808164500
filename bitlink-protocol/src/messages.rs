//! Message types for the bitlink serial protocol
//!
//! Messages are divided into two categories:
//! - Host → Device: the handshake command
//! - Device → Host: the handshake reply and event messages

use heapless::String;

use crate::events::{InputEvent, MAX_BASE_TEXT_LEN};

/// The only line the device reacts to
pub const HANDSHAKE_COMMAND: &str = "test";

/// Reply to [`HANDSHAKE_COMMAND`]
pub const HANDSHAKE_ACK: &str = "OK";

/// Maximum length of a device's event suffix
pub const MAX_SUFFIX_LEN: usize = 8;

/// Maximum length of an event message
pub const MAX_EVENT_MESSAGE_LEN: usize = MAX_BASE_TEXT_LEN + MAX_SUFFIX_LEN;

/// An event message ready to be written to the link
pub type EventMessage = String<MAX_EVENT_MESSAGE_LEN>;

/// Errors that can occur while building a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageError {
    /// Suffix exceeds [`MAX_SUFFIX_LEN`]
    SuffixTooLong,
}

/// Commands from the host to the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostCommand {
    /// Host asks the device to identify itself
    Identify,
}

impl HostCommand {
    /// Parse a received line
    ///
    /// Matching is exact and case-sensitive. Lines that are not a command
    /// return `None`; they are not errors, not all traffic on the link is
    /// addressed to this protocol.
    pub fn parse(line: &str) -> Option<Self> {
        match line {
            HANDSHAKE_COMMAND => Some(HostCommand::Identify),
            _ => None,
        }
    }
}

/// Protocol-fixed replies from the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceReply {
    /// Handshake acknowledged
    Ack,
}

impl DeviceReply {
    /// Wire text of this reply
    pub const fn as_str(self) -> &'static str {
        match self {
            DeviceReply::Ack => HANDSHAKE_ACK,
        }
    }
}

/// Build the message a device with `suffix` sends for `event`
pub fn event_message(event: InputEvent, suffix: &str) -> Result<EventMessage, MessageError> {
    if suffix.len() > MAX_SUFFIX_LEN {
        return Err(MessageError::SuffixTooLong);
    }

    let mut message = EventMessage::new();
    message
        .push_str(event.base_text())
        .map_err(|_| MessageError::SuffixTooLong)?;
    message
        .push_str(suffix)
        .map_err(|_| MessageError::SuffixTooLong)?;
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_handshake() {
        assert_eq!(HostCommand::parse("test"), Some(HostCommand::Identify));
    }

    #[test]
    fn test_parse_is_exact() {
        for line in ["Test", "TEST", "test ", " test", "test\r", "tes", "testtest", ""] {
            assert_eq!(HostCommand::parse(line), None, "line {:?}", line);
        }
    }

    #[test]
    fn test_ack_text() {
        assert_eq!(DeviceReply::Ack.as_str(), "OK");
    }

    #[test]
    fn test_event_messages_device_two() {
        let messages: [EventMessage; 8] =
            InputEvent::ALL.map(|event| event_message(event, "2").unwrap());
        assert_eq!(
            messages.each_ref().map(|m| m.as_str()),
            ["shake2", "p02", "p12", "p22", "a2", "b2", "ab2", "logo2"]
        );
    }

    #[test]
    fn test_event_message_without_suffix() {
        assert_eq!(event_message(InputEvent::LogoTouch, "").unwrap().as_str(), "logo");
    }

    #[test]
    fn test_longest_message_fits() {
        let suffix = "abcdefgh";
        assert_eq!(suffix.len(), MAX_SUFFIX_LEN);
        let message = event_message(InputEvent::Shake, suffix).unwrap();
        assert_eq!(message.len(), MAX_EVENT_MESSAGE_LEN);
    }

    #[test]
    fn test_suffix_too_long() {
        assert_eq!(
            event_message(InputEvent::ButtonA, "123456789"),
            Err(MessageError::SuffixTooLong)
        );
    }
}
