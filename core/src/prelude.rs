use serde::{Deserialize, Serialize};

/// Default number of samples generated per second of signal.
pub const DEFAULT_SAMPLE_RATE: u32 = 1000;

/// A sampled waveform: amplitude values at uniformly spaced instants.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Signal {
    samples: Vec<f64>,
}

impl Signal {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl From<Vec<f64>> for Signal {
    fn from(samples: Vec<f64>) -> Self {
        Self::new(samples)
    }
}

/// Parameters describing a sine wave to generate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveParams {
    pub frequency: f64,
    pub amplitude: f64,
    pub duration: f64,
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

impl WaveParams {
    pub fn new(frequency: f64, amplitude: f64, duration: f64) -> Self {
        Self {
            frequency,
            amplitude,
            duration,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }
}

/// Common error type for the acceptance checks.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    #[error("amplitude {value} outside acceptable range [{min}, {max}]")]
    AmplitudeOutOfRange { value: f64, min: f64, max: f64 },
    #[error("invalid range: {0}")]
    InvalidRange(String),
}

pub type SignalResult<T> = Result<T, SignalError>;
