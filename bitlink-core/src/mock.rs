//! Recording collaborators for host tests
//!
//! The sink, display and delay share one log so tests can check the exact
//! interleaving of serial writes, display updates and pauses.

use std::cell::RefCell;
use std::rc::Rc;
use std::string::{String, ToString};
use std::vec::Vec;

use embedded_hal_async::delay::DelayNs;

use crate::config::DeviceConfig;
use crate::device::Device;
use crate::traits::{Feedback, Icon, LineSink};

/// One observable side effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Line(String),
    Icon(Icon),
    Text(String),
    Pause(u32),
}

/// Shared, ordered record of side effects
#[derive(Debug, Clone, Default)]
pub struct Log(Rc<RefCell<Vec<Entry>>>);

impl Log {
    pub fn entries(&self) -> Vec<Entry> {
        self.0.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Serial lines and display text in order, icons and pauses skipped
    pub fn outputs(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter_map(|entry| match entry {
                Entry::Line(s) | Entry::Text(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    /// Serial lines only
    pub fn lines(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter_map(|entry| match entry {
                Entry::Line(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    fn push(&self, entry: Entry) {
        self.0.borrow_mut().push(entry);
    }
}

/// Error returned by a failing [`MockSink`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkDown;

pub struct MockSink {
    log: Log,
    pub fail: bool,
}

impl LineSink for MockSink {
    type Error = LinkDown;

    async fn write_line(&mut self, line: &str) -> Result<(), Self::Error> {
        if self.fail {
            return Err(LinkDown);
        }
        self.log.push(Entry::Line(line.to_string()));
        Ok(())
    }
}

pub struct MockFeedback {
    log: Log,
}

impl Feedback for MockFeedback {
    fn show_icon(&mut self, icon: Icon) {
        self.log.push(Entry::Icon(icon));
    }

    fn show_text(&mut self, text: &str) {
        self.log.push(Entry::Text(text.to_string()));
    }
}

pub struct MockDelay {
    log: Log,
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.log.push(Entry::Pause(ns / 1_000_000));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.log.push(Entry::Pause(ms));
    }
}

pub type MockDevice = Device<MockSink, MockFeedback, MockDelay>;

pub fn collaborators() -> (MockSink, MockFeedback, MockDelay, Log) {
    let log = Log::default();
    (
        MockSink {
            log: log.clone(),
            fail: false,
        },
        MockFeedback { log: log.clone() },
        MockDelay { log: log.clone() },
        log,
    )
}

pub fn device(config: DeviceConfig) -> (MockDevice, Log) {
    let (sink, feedback, delay, log) = collaborators();
    (Device::new(config, sink, feedback, delay), log)
}
