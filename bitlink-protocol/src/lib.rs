//! bitlink serial protocol
//!
//! This crate defines the text protocol spoken between a bitlink board and
//! the host application on the other end of its USB serial port.
//!
//! # Protocol Overview
//!
//! Every message is a single line of ASCII text:
//! ```text
//! host   -> device   test\n          identify yourself
//! device -> host     OK\r\n          handshake acknowledged
//! device -> host     <event><suffix>\r\n
//! ```
//!
//! The only command a board understands is `test`. Everything else a host
//! sends is ignored. Event messages are a fixed base text per input event
//! followed by the board's configured suffix, so two boards flashed with
//! different suffixes can share one host without ambiguity.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod events;
pub mod line;
pub mod messages;

pub use events::{InputEvent, MAX_BASE_TEXT_LEN};
pub use line::{Line, LineError, LineParser, LINE_DELIMITER, LINE_TERMINATOR, MAX_LINE_LEN};
pub use messages::{
    event_message, DeviceReply, EventMessage, HostCommand, MessageError, HANDSHAKE_ACK,
    HANDSHAKE_COMMAND, MAX_EVENT_MESSAGE_LEN, MAX_SUFFIX_LEN,
};
