//! Visual feedback on the board's display

/// Icons the core can ask the display to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Icon {
    /// Positive confirmation (tick mark)
    Check,
}

/// Display capability used during the handshake
///
/// Both calls replace whatever the display shows and return immediately;
/// the display keeps showing the content until the next call.
pub trait Feedback {
    /// Show an icon
    fn show_icon(&mut self, icon: Icon);

    /// Show a string
    fn show_text(&mut self, text: &str);
}

impl<T: Feedback> Feedback for &mut T {
    fn show_icon(&mut self, icon: Icon) {
        T::show_icon(self, icon)
    }

    fn show_text(&mut self, text: &str) {
        T::show_text(self, text)
    }
}
