use crate::prelude::{SignalError, SignalResult};
use serde::{Deserialize, Serialize};

/// Closed interval of amplitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmplitudeRange {
    pub min: f64,
    pub max: f64,
}

/// Interval amplitudes were historically drawn from. Wider than
/// [`ACCEPTANCE_RANGE`], so draws from it can be rejected.
pub const REFERENCE_DRAW_RANGE: AmplitudeRange = AmplitudeRange { min: 0.5, max: 2.5 };

/// Interval a recorded amplitude must fall in to be accepted.
pub const ACCEPTANCE_RANGE: AmplitudeRange = AmplitudeRange {
    min: 0.55,
    max: 2.45,
};

impl AmplitudeRange {
    pub fn new(min: f64, max: f64) -> SignalResult<Self> {
        Self { min, max }.validated()
    }

    /// Rejects non-finite bounds and inverted intervals.
    pub fn validated(self) -> SignalResult<Self> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(SignalError::InvalidRange(format!(
                "bounds must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(SignalError::InvalidRange(format!(
                "min {} exceeds max {}",
                self.min, self.max
            )));
        }
        Ok(self)
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn check(&self, value: f64) -> SignalResult<f64> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(SignalError::AmplitudeOutOfRange {
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// True when every value of `other` also lies in `self`.
    pub fn covers(&self, other: &AmplitudeRange) -> bool {
        self.min <= other.min && other.max <= self.max
    }
}

impl Default for AmplitudeRange {
    fn default() -> Self {
        ACCEPTANCE_RANGE
    }
}
