//! Configuration types
//!
//! A device's entire configuration is compiled in: the firmware build
//! script turns an identity file into a [`DeviceConfig`] constant.

pub mod device;
pub mod identity;

pub use device::{DeviceConfig, EventGate};
pub use identity::{DeviceIdentity, IdentityError, MAX_TOKEN_LEN, PRIMARY, SECONDARY};
