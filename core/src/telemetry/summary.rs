use crate::math::StatsHelper;
use crate::prelude::Signal;
use serde::{Deserialize, Serialize};

/// Compact description of a signal for reports and log lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalSummary {
    pub sample_count: usize,
    pub peak: f64,
    pub rms: f64,
    pub first_sample: Option<f64>,
}

impl SignalSummary {
    pub fn of(signal: &Signal) -> Self {
        let samples = signal.samples();
        Self {
            sample_count: samples.len(),
            peak: StatsHelper::peak(samples),
            rms: StatsHelper::rms(samples),
            first_sample: samples.first().copied(),
        }
    }
}
