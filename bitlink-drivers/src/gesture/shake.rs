//! Shake detection
//!
//! A shake is a burst of direction reversals. Each axis is classified as
//! positive, negative or inside the dead band around zero; a reversal is an
//! axis leaving the dead band on the opposite side from where it last was.
//! Gravity alone never reverses an axis, and slowly turning the board over
//! reverses it too rarely to count.

use crate::sensor::Acceleration;

/// Shake detector configuration
#[derive(Debug, Clone, Copy)]
pub struct ShakeConfig {
    /// Dead band half-width in milli-g
    pub tolerance_mg: i16,
    /// Reversals needed for a shake
    pub reversals: u8,
    /// Longest quiet stretch between reversals, in samples
    pub max_gap_samples: u8,
    /// Samples ignored after a shake is reported
    pub cooldown_samples: u8,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            tolerance_mg: 400,
            reversals: 4,
            max_gap_samples: 10,
            cooldown_samples: 25,
        }
    }
}

/// Shake gesture detector
#[derive(Debug, Clone)]
pub struct ShakeDetector {
    config: ShakeConfig,
    last_sign: [i8; 3],
    reversals: u8,
    since_reversal: u8,
    cooldown: u8,
}

impl Default for ShakeDetector {
    fn default() -> Self {
        Self::new(ShakeConfig::default())
    }
}

impl ShakeDetector {
    /// Create a detector
    pub fn new(config: ShakeConfig) -> Self {
        Self {
            config,
            last_sign: [0; 3],
            reversals: 0,
            since_reversal: 0,
            cooldown: 0,
        }
    }

    /// Feed one sample
    ///
    /// Returns true once per detected shake.
    pub fn update(&mut self, sample: Acceleration) -> bool {
        let reversed = self.track_signs(sample);

        if self.cooldown > 0 {
            self.cooldown -= 1;
            return false;
        }

        if reversed {
            self.reversals += 1;
            self.since_reversal = 0;
        } else {
            self.since_reversal = self.since_reversal.saturating_add(1);
            if self.since_reversal > self.config.max_gap_samples {
                self.reversals = 0;
            }
        }

        if self.reversals >= self.config.reversals {
            self.reversals = 0;
            self.cooldown = self.config.cooldown_samples;
            return true;
        }
        false
    }

    /// Update per-axis signs, returning true if any axis reversed
    fn track_signs(&mut self, sample: Acceleration) -> bool {
        let tolerance = self.config.tolerance_mg;
        let mut reversed = false;

        for (last, value) in self.last_sign.iter_mut().zip(sample.axes()) {
            let sign = if value > tolerance {
                1
            } else if value < -tolerance {
                -1
            } else {
                continue;
            };

            if *last != 0 && *last != sign {
                reversed = true;
            }
            *last = sign;
        }
        reversed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x_mg: i16, y_mg: i16, z_mg: i16) -> Acceleration {
        Acceleration { x_mg, y_mg, z_mg }
    }

    /// Board lying flat, screen up
    const FLAT: Acceleration = Acceleration {
        x_mg: 0,
        y_mg: 0,
        z_mg: -1000,
    };

    fn count_shakes(detector: &mut ShakeDetector, samples: &[Acceleration]) -> usize {
        samples.iter().filter(|s| detector.update(**s)).count()
    }

    #[test]
    fn test_resting_board_never_shakes() {
        let mut detector = ShakeDetector::default();
        let samples = [FLAT; 500];
        assert_eq!(count_shakes(&mut detector, &samples), 0);
    }

    #[test]
    fn test_vigorous_shake() {
        let mut detector = ShakeDetector::default();
        let mut samples = std::vec::Vec::new();
        for i in 0..8 {
            let x = if i % 2 == 0 { 1500 } else { -1500 };
            samples.push(sample(x, 0, -1000));
            samples.push(sample(x, 0, -1000));
        }
        assert_eq!(count_shakes(&mut detector, &samples), 1);
    }

    #[test]
    fn test_slow_flip_is_not_a_shake() {
        let mut detector = ShakeDetector::default();
        let mut samples = std::vec::Vec::new();
        // Turn over and back, one reversal every 50 samples
        for i in 0..6 {
            let z = if i % 2 == 0 { -1000 } else { 1000 };
            for _ in 0..50 {
                samples.push(sample(0, 0, z));
            }
        }
        assert_eq!(count_shakes(&mut detector, &samples), 0);
    }

    #[test]
    fn test_dead_band_ignored() {
        let mut detector = ShakeDetector::default();
        let mut samples = std::vec::Vec::new();
        for i in 0..40 {
            let x = if i % 2 == 0 { 300 } else { -300 };
            samples.push(sample(x, 0, -1000));
        }
        assert_eq!(count_shakes(&mut detector, &samples), 0);
    }

    #[test]
    fn test_cooldown_then_second_shake() {
        let mut detector = ShakeDetector::default();
        let mut burst = std::vec::Vec::new();
        for i in 0..6 {
            let y = if i % 2 == 0 { 1200 } else { -1200 };
            burst.push(sample(0, y, -1000));
        }

        assert_eq!(count_shakes(&mut detector, &burst), 1);
        // Still cooling down: the rest of the burst and a quiet spell
        let quiet = [FLAT; 30];
        assert_eq!(count_shakes(&mut detector, &quiet), 0);
        assert_eq!(count_shakes(&mut detector, &burst), 1);
    }
}
