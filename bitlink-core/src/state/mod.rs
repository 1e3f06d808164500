//! Handshake state
//!
//! The only state a device keeps is whether it has been identified. It is
//! a one-way latch: once a host has completed a handshake the device stays
//! identified until power is removed.

pub mod machine;

pub use machine::HandshakeState;
