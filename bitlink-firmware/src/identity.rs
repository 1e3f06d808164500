//! Compiled-in device identity
//!
//! `build.rs` generates this from `identities/<BITLINK_DEVICE>.toml`.

use bitlink_core::{DeviceConfig, DeviceIdentity, EventGate};

include!(concat!(env!("OUT_DIR"), "/identity.rs"));
