use crate::acceptance::range::{AmplitudeRange, ACCEPTANCE_RANGE};
use crate::acceptance::source::{AmplitudeSource, UniformAmplitudes};
use crate::generator::generate_sine_wave;
use crate::prelude::{SignalResult, DEFAULT_SAMPLE_RATE};
use crate::recording::SignalLog;
use crate::telemetry::log::LogManager;
use rand::rngs::StdRng;
use serde::Serialize;

/// Pairs the interval amplitudes are drawn from with the interval they
/// are accepted in.
#[derive(Debug, Clone, Copy)]
pub struct AcceptanceCheck {
    draw: AmplitudeRange,
    accept: AmplitudeRange,
    logger: LogManager,
}

/// Outcome of one randomized sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub draw: AmplitudeRange,
    pub accept: AmplitudeRange,
    pub amplitudes: Vec<f64>,
    pub violations: Vec<f64>,
}

impl SweepReport {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

impl AcceptanceCheck {
    /// Builds a check, warning when some drawable amplitudes would be
    /// rejected.
    pub fn new(draw: AmplitudeRange, accept: AmplitudeRange) -> SignalResult<Self> {
        let check = Self {
            draw: draw.validated()?,
            accept: accept.validated()?,
            logger: LogManager::new(),
        };
        if !check.is_consistent() {
            check.logger.range_mismatch(&check.draw, &check.accept);
        }
        Ok(check)
    }

    pub fn draw(&self) -> AmplitudeRange {
        self.draw
    }

    pub fn accept(&self) -> AmplitudeRange {
        self.accept
    }

    pub fn is_consistent(&self) -> bool {
        self.accept.covers(&self.draw)
    }

    /// Seeded uniform source over the draw range.
    pub fn source(&self, seed: u64) -> SignalResult<UniformAmplitudes<StdRng>> {
        UniformAmplitudes::seeded(self.draw, seed)
    }

    /// Draws `count` amplitudes, records one wave per amplitude into `log`
    /// and collects every amplitude that falls outside the acceptance range.
    pub fn run<S: AmplitudeSource>(
        &self,
        source: &mut S,
        count: usize,
        frequency: f64,
        duration: f64,
        log: &mut SignalLog,
    ) -> SweepReport {
        let mut amplitudes = Vec::with_capacity(count);
        let mut violations = Vec::new();

        for _ in 0..count {
            let amplitude = source.next_amplitude();
            log.record(generate_sine_wave(
                frequency,
                amplitude,
                duration,
                DEFAULT_SAMPLE_RATE,
            ));
            amplitudes.push(amplitude);

            if self.accept.check(amplitude).is_err() {
                self.logger.violation(amplitude, &self.accept);
                violations.push(amplitude);
            }
        }

        SweepReport {
            draw: self.draw,
            accept: self.accept,
            amplitudes,
            violations,
        }
    }
}

impl Default for AcceptanceCheck {
    fn default() -> Self {
        Self {
            draw: ACCEPTANCE_RANGE,
            accept: ACCEPTANCE_RANGE,
            logger: LogManager::new(),
        }
    }
}
