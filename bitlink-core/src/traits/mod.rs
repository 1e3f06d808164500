//! Collaborator traits
//!
//! These traits define the interface between the handshake and dispatch
//! logic and the board it runs on. The serial link and the display are
//! behind them; the pause uses `embedded_hal_async::delay::DelayNs`.

pub mod feedback;
pub mod line_sink;

pub use feedback::{Feedback, Icon};
pub use line_sink::LineSink;
