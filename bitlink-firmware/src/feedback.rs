//! Handshake feedback routed to the display task

use bitlink_core::traits::{Feedback, Icon};
use bitlink_display::DisplayCommand;

use crate::channels::DISPLAY_CMD;

/// [`Feedback`] that hands every request to the display task
///
/// Requests replace each other; the display task only ever renders the
/// latest one.
pub struct SignalFeedback;

impl Feedback for SignalFeedback {
    fn show_icon(&mut self, icon: Icon) {
        DISPLAY_CMD.signal(DisplayCommand::Icon(icon));
    }

    fn show_text(&mut self, text: &str) {
        DISPLAY_CMD.signal(DisplayCommand::text(text));
    }
}
