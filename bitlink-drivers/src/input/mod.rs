//! Digital input handling
//!
//! Raw pin levels become clicks in two steps: a [`Debouncer`] turns noisy
//! samples into a stable level, and a [`Button`] turns press/release edges
//! into clicks. A click is a release within [`LONG_CLICK_MS`] of the press;
//! longer holds are long clicks and send nothing.

pub mod buttons;
pub mod debounce;
pub mod touch;

pub use buttons::{Button, ButtonEvent, ButtonPair, ClickInput, LONG_CLICK_MS};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_SAMPLES};
pub use touch::{CapacitiveConfig, CapacitiveFilter, ResistiveTouch};
