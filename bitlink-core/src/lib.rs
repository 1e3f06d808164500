//! Board-agnostic core logic for the bitlink firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Device identity and build-time configuration types
//! - Handshake latch and the `test` / `OK` acknowledgement sequence
//! - Event dispatch from input events to serial messages
//! - Collaborator traits for the serial link and the display

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod device;
pub mod dispatch;
pub mod handshake;
pub mod state;
pub mod traits;

#[cfg(test)]
mod mock;

pub use config::{DeviceConfig, DeviceIdentity, EventGate, IdentityError};
pub use device::{Device, Outcome, Stimulus};
pub use dispatch::{Dispatch, EventDispatcher};
pub use handshake::{Handshake, Reception, ACK_PAUSE_MS};
pub use state::HandshakeState;
