//! Sample-count debouncer

/// Consecutive samples a new level must hold before it is accepted
pub const DEFAULT_DEBOUNCE_SAMPLES: u8 = 3;

/// Debouncer for a sampled digital level
#[derive(Debug, Clone)]
pub struct Debouncer {
    stable: bool,
    count: u8,
    threshold: u8,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_SAMPLES)
    }
}

impl Debouncer {
    /// Create a debouncer starting at the inactive level
    pub const fn new(threshold: u8) -> Self {
        Self {
            stable: false,
            count: 0,
            // A threshold of 0 would never accept a change
            threshold: if threshold == 0 { 1 } else { threshold },
        }
    }

    /// Current stable level
    pub fn level(&self) -> bool {
        self.stable
    }

    /// Feed one sample
    ///
    /// Returns the new stable level when it changes.
    pub fn update(&mut self, sample: bool) -> Option<bool> {
        if sample == self.stable {
            self.count = 0;
            return None;
        }

        self.count += 1;
        if self.count >= self.threshold {
            self.stable = sample;
            self.count = 0;
            return Some(sample);
        }
        None
    }
}
