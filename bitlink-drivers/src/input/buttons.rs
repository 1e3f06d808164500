//! Click detection for buttons and touch pads

use bitlink_protocol::InputEvent;

use super::debounce::Debouncer;

/// Holds longer than this are long clicks
pub const LONG_CLICK_MS: u64 = 1000;

/// Edges reported by a [`Button`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Stable press
    Down,
    /// Released within the long-click limit
    Click,
    /// Released after the long-click limit
    LongClick,
}

/// A debounced input with click timing
#[derive(Debug, Clone, Default)]
pub struct Button {
    debouncer: Debouncer,
    pressed_at: Option<u64>,
}

impl Button {
    /// Create a button with a custom debounce threshold
    pub const fn new(debounce_samples: u8) -> Self {
        Self {
            debouncer: Debouncer::new(debounce_samples),
            pressed_at: None,
        }
    }

    /// Check if the button is currently held (after debouncing)
    pub fn is_pressed(&self) -> bool {
        self.debouncer.level()
    }

    /// Feed one raw sample taken at `now_ms`
    pub fn update(&mut self, pressed: bool, now_ms: u64) -> Option<ButtonEvent> {
        match self.debouncer.update(pressed)? {
            true => {
                self.pressed_at = Some(now_ms);
                Some(ButtonEvent::Down)
            }
            false => {
                let held = now_ms.saturating_sub(self.pressed_at.take().unwrap_or(now_ms));
                if held < LONG_CLICK_MS {
                    Some(ButtonEvent::Click)
                } else {
                    Some(ButtonEvent::LongClick)
                }
            }
        }
    }
}

/// Buttons A and B with A+B chord detection
///
/// If both buttons are held at any point of a gesture, the gesture ends in
/// a single [`InputEvent::ButtonAB`] once both are released, and neither
/// button reports its own click. The chord's long-click limit runs from the
/// first press of the gesture.
#[derive(Debug, Clone, Default)]
pub struct ButtonPair {
    a: Button,
    b: Button,
    chord: bool,
    gesture_start: Option<u64>,
}

impl ButtonPair {
    /// Create a button pair with default debouncing
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw sample of both buttons taken at `now_ms`
    pub fn update(&mut self, a_pressed: bool, b_pressed: bool, now_ms: u64) -> Option<InputEvent> {
        let a = self.a.update(a_pressed, now_ms);
        let b = self.b.update(b_pressed, now_ms);

        if self.gesture_start.is_none()
            && (a == Some(ButtonEvent::Down) || b == Some(ButtonEvent::Down))
        {
            self.gesture_start = Some(now_ms);
        }

        if self.a.is_pressed() && self.b.is_pressed() {
            self.chord = true;
        }

        if self.a.is_pressed() || self.b.is_pressed() {
            if self.chord {
                return None;
            }
            // One button released while the other is still held alone
            let click = Self::single_click(a, b);
            if click.is_some() {
                // The button still held starts the next gesture
                self.gesture_start = self.a.pressed_at.or(self.b.pressed_at);
            }
            return click;
        }

        // Both released: gesture over
        let start = self.gesture_start.take();
        if core::mem::take(&mut self.chord) {
            let held = now_ms.saturating_sub(start.unwrap_or(now_ms));
            return (held < LONG_CLICK_MS).then_some(InputEvent::ButtonAB);
        }
        Self::single_click(a, b)
    }

    fn single_click(a: Option<ButtonEvent>, b: Option<ButtonEvent>) -> Option<InputEvent> {
        match (a, b) {
            (Some(ButtonEvent::Click), _) => Some(InputEvent::ButtonA),
            (_, Some(ButtonEvent::Click)) => Some(InputEvent::ButtonB),
            _ => None,
        }
    }
}

/// A touch input reporting its own event on click
#[derive(Debug, Clone)]
pub struct ClickInput {
    button: Button,
    event: InputEvent,
}

impl ClickInput {
    /// Report `event` whenever this input is clicked
    pub fn new(event: InputEvent) -> Self {
        Self {
            button: Button::default(),
            event,
        }
    }

    /// Feed one raw sample taken at `now_ms`
    pub fn update(&mut self, active: bool, now_ms: u64) -> Option<InputEvent> {
        match self.button.update(active, now_ms) {
            Some(ButtonEvent::Click) => Some(self.event),
            _ => None,
        }
    }
}
