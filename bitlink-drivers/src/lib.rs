//! Hardware driver implementations
//!
//! This crate provides the board-side collaborators of bitlink-core:
//!
//! - Input handling (debouncing, click and chord tracking, touch sensing)
//! - Accelerometer (LSM303AGR over async I2C)
//! - Gesture detection (shake)
//! - Serial line reader and writer over `embedded-io-async`

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod gesture;
pub mod input;
pub mod sensor;
pub mod serial;
