//! LED matrix rendering for bitlink
//!
//! This crate provides:
//! - `Frame`, a 5x5 one-bit frame buffer
//! - Glyphs for the handshake icon and a 5x5 font
//! - `Screen`, which turns display commands into frames over time
//!   (static characters, scrolling text)
//! - `LedMatrix`, a row-scanning driver over `embedded-hal` output pins
//!
//! # Architecture
//!
//! The controller never touches the LEDs. It sends a [`DisplayCommand`] to
//! the display task, which owns a [`Screen`] and a [`LedMatrix`] and keeps
//! multiplexing rows while the controller is busy (for example during the
//! handshake pause).

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod frame;
pub mod glyphs;
pub mod matrix;
pub mod screen;

// Re-export key types
pub use frame::{Frame, MATRIX_SIZE};
pub use matrix::LedMatrix;
pub use screen::{DisplayCommand, Screen, MAX_TEXT_LEN, SCROLL_STEP_MS};
