//! Sensor drivers

pub mod lsm303agr;

pub use lsm303agr::{AccelError, Acceleration, Lsm303agr};
