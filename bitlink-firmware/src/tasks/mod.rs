//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod buttons;
pub mod controller;
pub mod display;
pub mod serial_rx;
pub mod shake;
pub mod touch;

pub use buttons::buttons_task;
pub use controller::controller_task;
pub use display::display_task;
pub use serial_rx::serial_rx_task;
pub use shake::shake_task;
pub use touch::touch_task;
