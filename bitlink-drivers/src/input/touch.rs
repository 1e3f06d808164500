//! Touch sensing
//!
//! The ring pins are resistive: external pull-ups hold them high and a
//! finger bridging the pin and GND pulls them low. The logo pad is
//! capacitive: a finger adds capacitance, so the pad takes longer to charge
//! after being discharged. The firmware measures that charge time; this
//! module decides whether it means "touched".

use embedded_hal::digital::InputPin;

/// Resistive touch pin
pub struct ResistiveTouch<P> {
    pin: P,
}

impl<P: InputPin> ResistiveTouch<P> {
    /// Wrap an input pin configured without internal pull
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Check if the pin is being touched
    pub fn is_touched(&mut self) -> Result<bool, P::Error> {
        self.pin.is_low()
    }

    /// Release the pin
    pub fn release(self) -> P {
        self.pin
    }
}

/// Capacitive filter configuration
#[derive(Debug, Clone, Copy)]
pub struct CapacitiveConfig {
    /// Charge time above the baseline that counts as touched
    pub threshold: u32,
    /// Samples averaged into the initial baseline
    pub calibration_samples: u8,
    /// Baseline follows untouched samples by 1/2^shift per sample
    ///
    /// Values above 31 act as 31 (no drift).
    pub drift_shift: u8,
}

impl Default for CapacitiveConfig {
    fn default() -> Self {
        Self {
            threshold: 40,
            calibration_samples: 16,
            drift_shift: 4,
        }
    }
}

/// Turns charge-time samples into a touched/untouched level
#[derive(Debug, Clone)]
pub struct CapacitiveFilter {
    config: CapacitiveConfig,
    baseline: u32,
    sum: u32,
    collected: u8,
}

impl Default for CapacitiveFilter {
    fn default() -> Self {
        Self::new(CapacitiveConfig::default())
    }
}

impl CapacitiveFilter {
    /// Create an uncalibrated filter
    pub fn new(config: CapacitiveConfig) -> Self {
        Self {
            config,
            baseline: 0,
            sum: 0,
            collected: 0,
        }
    }

    /// Check if the initial baseline has been established
    pub fn is_calibrated(&self) -> bool {
        self.collected >= self.config.calibration_samples
    }

    /// Current untouched charge time
    pub fn baseline(&self) -> u32 {
        self.baseline
    }

    /// Feed one charge-time sample
    ///
    /// Returns true while touched. Never reports a touch during
    /// calibration, so the pad must be left alone for the first samples
    /// after power-on.
    pub fn update(&mut self, charge_time: u32) -> bool {
        if !self.is_calibrated() {
            self.sum = self.sum.saturating_add(charge_time);
            self.collected += 1;
            if self.is_calibrated() {
                self.baseline = self.sum / u32::from(self.collected.max(1));
            }
            return false;
        }

        let touched = charge_time > self.baseline.saturating_add(self.config.threshold);
        if !touched {
            // Follow slow drift (temperature, humidity) while untouched
            let shift = u32::from(self.config.drift_shift.min(31));
            if charge_time > self.baseline {
                self.baseline += (charge_time - self.baseline) >> shift;
            } else {
                self.baseline -= (self.baseline - charge_time) >> shift;
            }
        }
        touched
    }
}
