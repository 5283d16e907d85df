use crate::acceptance::AmplitudeRange;
use crate::prelude::Signal;
use crate::telemetry::summary::SignalSummary;
use log::{debug, info, warn};

/// Routes signal-log events through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn recorded(&self, position: usize, signal: &Signal) {
        debug!("recorded signal #{} ({} samples)", position, signal.len());
    }

    pub fn cleared(&self, dropped: usize) {
        debug!("cleared signal log ({} signals dropped)", dropped);
    }

    pub fn summary(&self, label: &str, summary: &SignalSummary) {
        info!(
            "{}: {} samples, peak {:.4}, rms {:.4}",
            label, summary.sample_count, summary.peak, summary.rms
        );
    }

    pub fn range_mismatch(&self, draw: &AmplitudeRange, accept: &AmplitudeRange) {
        warn!(
            "draw range [{}, {}] is not covered by acceptance range [{}, {}]; checks may fail at random",
            draw.min, draw.max, accept.min, accept.max
        );
    }

    pub fn violation(&self, amplitude: f64, accept: &AmplitudeRange) {
        warn!(
            "amplitude {:.4} outside acceptance range [{}, {}]",
            amplitude, accept.min, accept.max
        );
    }
}
