//! Display content over time
//!
//! A [`Screen`] holds the frame currently on the matrix and, while text is
//! scrolling, the position in that text. The display task feeds it commands
//! and the current time; the matrix driver only ever sees [`Screen::frame`].

use bitlink_core::traits::Icon;
use heapless::String;

use crate::frame::{Frame, MATRIX_SIZE};
use crate::glyphs;

/// Time each column stays put while scrolling
pub const SCROLL_STEP_MS: u64 = 150;

/// Longest text a command can carry
pub const MAX_TEXT_LEN: usize = 16;

/// Columns each character takes while scrolling (glyph plus gap)
const CHAR_PITCH: usize = MATRIX_SIZE + 1;

/// What the display should show next
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayCommand {
    /// Show an icon until the next command
    Icon(Icon),
    /// Show a character, or scroll longer text once
    Text(String<MAX_TEXT_LEN>),
}

impl DisplayCommand {
    /// Text command, truncated to [`MAX_TEXT_LEN`] bytes on a character boundary
    pub fn text(text: &str) -> Self {
        let mut s = String::new();
        for ch in text.chars() {
            if s.push(ch).is_err() {
                break;
            }
        }
        DisplayCommand::Text(s)
    }
}

/// Scroll position within a text
#[derive(Debug, Clone)]
struct Scroll {
    text: String<MAX_TEXT_LEN>,
    position: usize,
}

impl Scroll {
    /// Next column to bring in from the right, `None` once the text is gone
    fn next_column(&mut self) -> Option<u8> {
        let chars = self.text.chars().count();
        // The last gap plus the trailing blanks push the text off the left edge
        let total = chars * CHAR_PITCH + MATRIX_SIZE - 1;
        if self.position >= total {
            return None;
        }

        let index = self.position / CHAR_PITCH;
        let offset = self.position % CHAR_PITCH;
        self.position += 1;

        let column = match self.text.chars().nth(index) {
            Some(ch) if offset < MATRIX_SIZE => glyphs::glyph(ch).column(offset),
            _ => 0,
        };
        Some(column)
    }
}

/// Current display content
#[derive(Debug, Clone, Default)]
pub struct Screen {
    frame: Frame,
    scroll: Option<Scroll>,
    next_step_ms: u64,
}

impl Screen {
    /// Create a blank screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame to put on the matrix
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Check if text is still scrolling
    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_some()
    }

    /// Replace the content
    ///
    /// Any text still scrolling is abandoned.
    pub fn apply(&mut self, command: &DisplayCommand, now_ms: u64) {
        self.scroll = None;
        match command {
            DisplayCommand::Icon(icon) => self.frame = glyphs::icon(*icon),
            DisplayCommand::Text(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (None, _) => self.frame = Frame::BLANK,
                    (Some(ch), None) => self.frame = glyphs::glyph(ch),
                    (Some(_), Some(_)) => {
                        self.frame = Frame::BLANK;
                        self.scroll = Some(Scroll {
                            text: text.clone(),
                            position: 0,
                        });
                        self.next_step_ms = now_ms;
                        self.tick(now_ms);
                    }
                }
            }
        }
    }

    /// Advance scrolling up to `now_ms`
    ///
    /// Returns true if the frame changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut changed = false;
        while let Some(scroll) = &mut self.scroll {
            if now_ms < self.next_step_ms {
                break;
            }
            match scroll.next_column() {
                Some(column) => {
                    self.frame.shift_left(column);
                    self.next_step_ms += SCROLL_STEP_MS;
                    changed = true;
                }
                None => {
                    self.scroll = None;
                    self.frame = Frame::BLANK;
                }
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(screen: &mut Screen, text: &str, now_ms: u64) {
        screen.apply(&DisplayCommand::text(text), now_ms);
    }

    #[test]
    fn test_icon_is_static() {
        let mut screen = Screen::new();
        screen.apply(&DisplayCommand::Icon(Icon::Check), 0);
        assert_eq!(*screen.frame(), glyphs::icon(Icon::Check));
        assert!(!screen.is_scrolling());
        assert!(!screen.tick(5_000));
        assert_eq!(*screen.frame(), glyphs::icon(Icon::Check));
    }

    #[test]
    fn test_single_character_is_static() {
        let mut screen = Screen::new();
        show(&mut screen, "1", 0);
        assert_eq!(*screen.frame(), glyphs::glyph('1'));
        assert!(!screen.is_scrolling());
    }

    #[test]
    fn test_empty_text_clears() {
        let mut screen = Screen::new();
        screen.apply(&DisplayCommand::Icon(Icon::Check), 0);
        show(&mut screen, "", 10);
        assert!(screen.frame().is_blank());
    }

    #[test]
    fn test_text_scrolls_once_then_clears() {
        let mut screen = Screen::new();
        show(&mut screen, "12", 0);
        assert!(screen.is_scrolling());

        // Five columns in, the first character is fully on screen
        assert!(screen.tick(4 * SCROLL_STEP_MS));
        assert_eq!(*screen.frame(), glyphs::glyph('1'));

        // One gap column later the second character starts
        screen.tick(10 * SCROLL_STEP_MS);
        assert_eq!(*screen.frame(), glyphs::glyph('2'));

        // The trailing columns push everything off the left edge
        screen.tick(15 * SCROLL_STEP_MS);
        assert!(screen.frame().is_blank());

        screen.tick(10_000);
        assert!(!screen.is_scrolling());
        assert!(screen.frame().is_blank());
    }

    #[test]
    fn test_tick_before_step_is_noop() {
        let mut screen = Screen::new();
        show(&mut screen, "ab", 1_000);
        let frame = *screen.frame();
        assert!(!screen.tick(1_000 + SCROLL_STEP_MS - 1));
        assert_eq!(*screen.frame(), frame);
    }

    #[test]
    fn test_new_command_interrupts_scroll() {
        let mut screen = Screen::new();
        show(&mut screen, "hello", 0);
        screen.tick(300);
        screen.apply(&DisplayCommand::Icon(Icon::Check), 400);
        assert!(!screen.is_scrolling());
        assert_eq!(*screen.frame(), glyphs::icon(Icon::Check));
        assert!(!screen.tick(1_000));
    }

    #[test]
    fn test_text_command_truncates() {
        let DisplayCommand::Text(text) = DisplayCommand::text("abcdefghijklmnopqrstuvwxyz") else {
            panic!("expected text command");
        };
        assert_eq!(text.as_str(), "abcdefghijklmnop");

        // Multi-byte characters are never split
        let DisplayCommand::Text(text) = DisplayCommand::text("ééééééééé") else {
            panic!("expected text command");
        };
        assert_eq!(text.chars().count(), 8);
    }
}
