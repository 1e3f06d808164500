//! Line framing for the serial link
//!
//! Inbound traffic is split on `'\n'` only. A carriage return is kept as
//! part of the line, so `"test\r"` is a different line from `"test"`.
//! Outbound lines are terminated with [`LINE_TERMINATOR`].

use heapless::{String, Vec};

/// Terminator appended to every outbound line
pub const LINE_TERMINATOR: &str = "\r\n";

/// Inbound line delimiter
pub const LINE_DELIMITER: u8 = b'\n';

/// Maximum inbound line length in bytes, delimiter excluded
pub const MAX_LINE_LEN: usize = 32;

/// A received line with its delimiter stripped
pub type Line = String<MAX_LINE_LEN>;

/// Errors that can occur while framing inbound bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded [`MAX_LINE_LEN`] and was discarded
    Overflow,
    /// Line was not valid UTF-8 and was discarded
    InvalidUtf8,
}

/// Splits a byte stream into lines
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    buffer: Vec<u8, MAX_LINE_LEN>,
    overflowed: bool,
}

impl LineParser {
    /// Create a new line parser
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            overflowed: false,
        }
    }

    /// Discard any partially received line
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.overflowed = false;
    }

    /// Number of bytes buffered for the line in progress
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(line))` when a delimiter completes a line,
    /// `Ok(None)` when more bytes are needed, or `Err` when the completed
    /// line had to be discarded.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Line>, LineError> {
        if byte != LINE_DELIMITER {
            if !self.overflowed && self.buffer.push(byte).is_err() {
                // Keep swallowing bytes until the delimiter resynchronizes us
                self.overflowed = true;
            }
            return Ok(None);
        }

        if self.overflowed {
            self.reset();
            return Err(LineError::Overflow);
        }

        let result = match core::str::from_utf8(&self.buffer) {
            Ok(text) => {
                let mut line = Line::new();
                // Capacity matches the byte buffer
                let _ = line.push_str(text);
                Ok(Some(line))
            }
            Err(_) => Err(LineError::InvalidUtf8),
        };

        self.reset();
        result
    }

    /// Feed multiple bytes to the parser
    ///
    /// Returns the first complete line found, if any, together with the
    /// number of bytes consumed. Bytes after the delimiter are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> (usize, Result<Option<Line>, LineError>) {
        for (i, &byte) in bytes.iter().enumerate() {
            match self.feed(byte) {
                Ok(None) => {}
                other => return (i + 1, other),
            }
        }
        (bytes.len(), Ok(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_line() {
        let mut parser = LineParser::new();
        let (used, line) = parser.feed_bytes(b"test\n");
        assert_eq!(used, 5);
        assert_eq!(line.unwrap().unwrap().as_str(), "test");
    }

    #[test]
    fn test_carriage_return_is_kept() {
        let mut parser = LineParser::new();
        let (_, line) = parser.feed_bytes(b"test\r\n");
        assert_eq!(line.unwrap().unwrap().as_str(), "test\r");
    }

    #[test]
    fn test_empty_line() {
        let mut parser = LineParser::new();
        assert_eq!(parser.feed(b'\n').unwrap().unwrap().as_str(), "");
    }

    #[test]
    fn test_bytes_after_delimiter_not_consumed() {
        let mut parser = LineParser::new();
        let input = b"one\ntwo\n";

        let (used, first) = parser.feed_bytes(input);
        assert_eq!(first.unwrap().unwrap().as_str(), "one");

        let (_, second) = parser.feed_bytes(&input[used..]);
        assert_eq!(second.unwrap().unwrap().as_str(), "two");
    }

    #[test]
    fn test_partial_line_waits() {
        let mut parser = LineParser::new();
        let (used, line) = parser.feed_bytes(b"tes");
        assert_eq!(used, 3);
        assert_eq!(line, Ok(None));
        assert_eq!(parser.pending(), 3);

        let (_, line) = parser.feed_bytes(b"t\n");
        assert_eq!(line.unwrap().unwrap().as_str(), "test");
        assert_eq!(parser.pending(), 0);
    }

    #[test]
    fn test_overflow_discards_and_resyncs() {
        let mut parser = LineParser::new();
        for _ in 0..MAX_LINE_LEN + 10 {
            assert_eq!(parser.feed(b'x'), Ok(None));
        }
        assert_eq!(parser.feed(b'\n'), Err(LineError::Overflow));

        let (_, line) = parser.feed_bytes(b"test\n");
        assert_eq!(line.unwrap().unwrap().as_str(), "test");
    }

    #[test]
    fn test_line_at_capacity_is_accepted() {
        let mut parser = LineParser::new();
        for _ in 0..MAX_LINE_LEN {
            parser.feed(b'y').unwrap();
        }
        let line = parser.feed(b'\n').unwrap().unwrap();
        assert_eq!(line.len(), MAX_LINE_LEN);
    }

    #[test]
    fn test_invalid_utf8() {
        let mut parser = LineParser::new();
        let (_, line) = parser.feed_bytes(&[0xFF, 0xFE, b'\n']);
        assert_eq!(line, Err(LineError::InvalidUtf8));

        // Parser recovers for the next line
        let (_, line) = parser.feed_bytes(b"ok\n");
        assert_eq!(line.unwrap().unwrap().as_str(), "ok");
    }

    #[test]
    fn test_reset_drops_partial_line() {
        let mut parser = LineParser::new();
        parser.feed_bytes(b"garbage");
        parser.reset();
        let (_, line) = parser.feed_bytes(b"test\n");
        assert_eq!(line.unwrap().unwrap().as_str(), "test");
    }

    proptest! {
        #[test]
        fn chunking_does_not_change_lines(
            text in "[a-z0-9 ]{0,32}",
            split in 0usize..34,
        ) {
            let mut input = std::vec::Vec::from(text.as_bytes());
            input.push(b'\n');
            let split = split.min(input.len());

            let mut parser = LineParser::new();
            let (used, first) = parser.feed_bytes(&input[..split]);
            prop_assert_eq!(used, split);

            let line = match first {
                Ok(Some(line)) => line,
                Ok(None) => parser.feed_bytes(&input[split..]).1.unwrap().unwrap(),
                Err(e) => panic!("unexpected error {:?}", e),
            };
            prop_assert_eq!(line.as_str(), text.as_str());
        }
    }
}
