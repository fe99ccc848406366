pub const DEFAULT_WARN_PERCENT: f64 = 10.0;
pub const DEFAULT_CRIT_PERCENT: f64 = 5.0;

/// Lower bounds on total free percent; crossing `warn` warns, crossing `crit` is critical.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    pub warn_percent: f64,
    pub crit_percent: f64,
}

impl Thresholds {
    pub fn new(warn_percent: f64, crit_percent: f64) -> Self {
        Thresholds {
            warn_percent,
            crit_percent,
        }
    }

    /// Warning must not sit below critical.
    pub fn is_inverted(&self) -> bool {
        self.warn_percent < self.crit_percent
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds::new(DEFAULT_WARN_PERCENT, DEFAULT_CRIT_PERCENT)
    }
}
