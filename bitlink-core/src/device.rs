//! A configured device and its collaborators
//!
//! [`Device`] is what the firmware's controller task owns. Every stimulus,
//! received line or input event, goes through [`Device::handle`] one at a
//! time, which gives the single-context, run-to-completion behaviour the
//! handshake pause relies on.

use bitlink_protocol::{InputEvent, Line};
use embedded_hal_async::delay::DelayNs;

use crate::config::DeviceConfig;
use crate::dispatch::{Dispatch, EventDispatcher};
use crate::handshake::{Handshake, Reception};
use crate::state::HandshakeState;
use crate::traits::{Feedback, LineSink};

/// Something for the device to react to
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stimulus {
    /// A line received from the host
    Line(Line),
    /// A physical input event
    Event(InputEvent),
}

/// Result of handling one stimulus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Outcome of a received line
    Line(Reception),
    /// Outcome of an input event
    Event(Dispatch),
}

/// Handshake and dispatch bound to one identity
pub struct Device<S, F, D> {
    config: DeviceConfig,
    handshake: Handshake,
    dispatcher: EventDispatcher,
    sink: S,
    feedback: F,
    delay: D,
}

impl<S, F, D> Device<S, F, D>
where
    S: LineSink,
    F: Feedback,
    D: DelayNs,
{
    /// Create an unidentified device
    pub fn new(config: DeviceConfig, sink: S, feedback: F, delay: D) -> Self {
        Self {
            config,
            handshake: Handshake::new(),
            dispatcher: EventDispatcher::new(config.event_gate),
            sink,
            feedback,
            delay,
        }
    }

    /// Configuration this device was built with
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Current handshake state
    pub fn state(&self) -> HandshakeState {
        self.handshake.state()
    }

    /// Handle a received line
    pub async fn on_line_received(&mut self, line: &str) -> Result<Reception, S::Error> {
        self.handshake
            .on_line_received(
                line,
                &self.config.identity,
                &mut self.sink,
                &mut self.feedback,
                &mut self.delay,
            )
            .await
    }

    /// Handle an input event
    pub async fn on_event(&mut self, event: InputEvent) -> Result<Dispatch, S::Error> {
        self.dispatcher
            .dispatch(
                event,
                &self.config.identity,
                self.handshake.state(),
                &mut self.sink,
            )
            .await
    }

    /// Route a stimulus to the handshake or the dispatcher
    ///
    /// The line is consumed here; nothing keeps it after the comparison.
    pub async fn handle(&mut self, stimulus: Stimulus) -> Result<Outcome, S::Error> {
        match stimulus {
            Stimulus::Line(line) => self.on_line_received(&line).await.map(Outcome::Line),
            Stimulus::Event(event) => self.on_event(event).await.map(Outcome::Event),
        }
    }

    /// Release the collaborators
    pub fn into_parts(self) -> (S, F, D) {
        (self.sink, self.feedback, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EventGate, PRIMARY, SECONDARY};
    use crate::handshake::ACK_PAUSE_MS;
    use crate::mock::{device, Entry};
    use crate::traits::Icon;
    use embassy_futures::block_on;
    use proptest::prelude::*;

    fn line(text: &str) -> Stimulus {
        let mut line = Line::new();
        line.push_str(text).unwrap();
        Stimulus::Line(line)
    }

    fn run(config: DeviceConfig, stimuli: &[Stimulus]) -> std::vec::Vec<std::string::String> {
        let (mut device, log) = device(config);
        for stimulus in stimuli {
            block_on(device.handle(stimulus.clone())).unwrap();
        }
        log.outputs()
    }

    #[test]
    fn test_two_devices_same_input() {
        let stimuli = [
            line("test"),
            Stimulus::Event(InputEvent::ButtonA),
            Stimulus::Event(InputEvent::Shake),
        ];

        assert_eq!(
            run(DeviceConfig::new(PRIMARY), &stimuli),
            ["OK", "1", "a", "shake"]
        );
        assert_eq!(
            run(DeviceConfig::new(SECONDARY), &stimuli),
            ["OK", "2", "a2", "shake2"]
        );
    }

    #[test]
    fn test_display_interleaving() {
        let (mut device, log) = device(DeviceConfig::new(SECONDARY));

        block_on(device.handle(line("test"))).unwrap();
        block_on(device.handle(Stimulus::Event(InputEvent::ButtonA))).unwrap();

        assert_eq!(
            log.entries(),
            [
                Entry::Line("OK".into()),
                Entry::Icon(Icon::Check),
                Entry::Pause(ACK_PAUSE_MS),
                Entry::Text("2".into()),
                Entry::Line("a2".into()),
            ]
        );
    }

    #[test]
    fn test_repeated_handshake_repeats_sequence() {
        let (mut device, log) = device(DeviceConfig::new(PRIMARY));

        assert_eq!(
            block_on(device.handle(line("test"))),
            Ok(Outcome::Line(Reception::Acknowledged))
        );
        let first = log.entries();
        log.clear();

        assert_eq!(
            block_on(device.handle(line("test"))),
            Ok(Outcome::Line(Reception::Acknowledged))
        );
        assert_eq!(log.entries(), first);
        assert_eq!(first.len(), 4);
        assert_eq!(device.state(), HandshakeState::Identified);
    }

    #[test]
    fn test_events_before_handshake() {
        let (mut device, log) = device(DeviceConfig::new(PRIMARY));

        for event in InputEvent::ALL {
            assert_eq!(
                block_on(device.on_event(event)),
                Ok(Dispatch::Sent)
            );
        }

        assert_eq!(device.state(), HandshakeState::Unidentified);
        assert_eq!(
            log.lines(),
            ["shake", "p0", "p1", "p2", "a", "b", "ab", "logo"]
        );
    }

    #[test]
    fn test_gated_device() {
        let config = DeviceConfig::new(SECONDARY).with_event_gate(EventGate::AfterHandshake);
        let stimuli = [
            Stimulus::Event(InputEvent::ButtonB),
            line("test"),
            Stimulus::Event(InputEvent::ButtonB),
        ];

        assert_eq!(run(config, &stimuli), ["OK", "2", "b2"]);
    }

    #[test]
    fn test_case_and_whitespace_mismatch() {
        let (mut device, log) = device(DeviceConfig::new(PRIMARY));

        for text in ["Test", "test "] {
            assert_eq!(
                block_on(device.handle(line(text))),
                Ok(Outcome::Line(Reception::Ignored))
            );
        }

        assert!(log.is_empty());
        assert_eq!(device.state(), HandshakeState::Unidentified);
    }

    #[test]
    fn test_config_and_parts() {
        let (device, _) = device(DeviceConfig::new(SECONDARY));
        assert_eq!(device.config().identity, SECONDARY);
        let (sink, _, _) = device.into_parts();
        assert!(!sink.fail);
    }

    proptest! {
        #[test]
        fn other_lines_are_silent(text in "\\PC{0,40}", identified in any::<bool>()) {
            prop_assume!(text != "test");

            let (mut device, log) = device(DeviceConfig::new(SECONDARY));
            if identified {
                block_on(device.on_line_received("test")).unwrap();
                log.clear();
            }
            let before = device.state();

            let result = block_on(device.on_line_received(&text));

            prop_assert_eq!(result, Ok(Reception::Ignored));
            prop_assert!(log.is_empty());
            prop_assert_eq!(device.state(), before);
        }
    }
}
