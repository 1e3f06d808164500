//! Physical input events reported by a board

/// Input events a board turns into serial messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Board was shaken
    Shake,
    /// Ring pin 0 touched and released
    TouchP0,
    /// Ring pin 1 touched and released
    TouchP1,
    /// Ring pin 2 touched and released
    TouchP2,
    /// Button A clicked
    ButtonA,
    /// Button B clicked
    ButtonB,
    /// Buttons A and B clicked together
    ButtonAB,
    /// Logo pad touched and released
    LogoTouch,
}

// Wire format base texts
const TEXT_SHAKE: &str = "shake";
const TEXT_P0: &str = "p0";
const TEXT_P1: &str = "p1";
const TEXT_P2: &str = "p2";
const TEXT_A: &str = "a";
const TEXT_B: &str = "b";
const TEXT_AB: &str = "ab";
const TEXT_LOGO: &str = "logo";

/// Length of the longest base text
pub const MAX_BASE_TEXT_LEN: usize = 5;

impl InputEvent {
    /// Every event, in wire-table order
    pub const ALL: [InputEvent; 8] = [
        InputEvent::Shake,
        InputEvent::TouchP0,
        InputEvent::TouchP1,
        InputEvent::TouchP2,
        InputEvent::ButtonA,
        InputEvent::ButtonB,
        InputEvent::ButtonAB,
        InputEvent::LogoTouch,
    ];

    /// Fixed message text for this event, before any device suffix
    pub const fn base_text(self) -> &'static str {
        match self {
            InputEvent::Shake => TEXT_SHAKE,
            InputEvent::TouchP0 => TEXT_P0,
            InputEvent::TouchP1 => TEXT_P1,
            InputEvent::TouchP2 => TEXT_P2,
            InputEvent::ButtonA => TEXT_A,
            InputEvent::ButtonB => TEXT_B,
            InputEvent::ButtonAB => TEXT_AB,
            InputEvent::LogoTouch => TEXT_LOGO,
        }
    }

    /// Parse an event from its base text
    pub fn from_base_text(text: &str) -> Option<Self> {
        match text {
            TEXT_SHAKE => Some(InputEvent::Shake),
            TEXT_P0 => Some(InputEvent::TouchP0),
            TEXT_P1 => Some(InputEvent::TouchP1),
            TEXT_P2 => Some(InputEvent::TouchP2),
            TEXT_A => Some(InputEvent::ButtonA),
            TEXT_B => Some(InputEvent::ButtonB),
            TEXT_AB => Some(InputEvent::ButtonAB),
            TEXT_LOGO => Some(InputEvent::LogoTouch),
            _ => None,
        }
    }

    /// Recover the event from a message sent by the device with `suffix`
    ///
    /// Host-side helper: returns `None` for lines that are not an event
    /// message from that device.
    pub fn from_message(line: &str, suffix: &str) -> Option<Self> {
        line.strip_suffix(suffix).and_then(Self::from_base_text)
    }
}
