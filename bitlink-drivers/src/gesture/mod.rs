//! Gesture recognition from accelerometer samples

pub mod shake;

pub use shake::{ShakeConfig, ShakeDetector};
