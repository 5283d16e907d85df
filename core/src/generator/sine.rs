use crate::prelude::{Signal, WaveParams};
use std::f64::consts::PI;

/// Largest signal the generator will allocate (2 GiB of `f64` samples).
pub const MAX_SAMPLE_COUNT: usize = 1 << 28;

/// Number of samples covering `duration` seconds at `sample_rate`,
/// truncated toward zero. Non-finite or non-positive products, and products
/// above [`MAX_SAMPLE_COUNT`], give zero.
pub fn sample_count(sample_rate: u32, duration: f64) -> usize {
    let count = sample_rate as f64 * duration;
    if count.is_finite() && count > 0.0 && count < (MAX_SAMPLE_COUNT + 1) as f64 {
        count as usize
    } else {
        0
    }
}

/// Generates a sine wave over the half-open time grid `[0, duration)`.
///
/// Sample `i` is `amplitude * sin(2π * frequency * i / sample_rate)`. No
/// input is rejected: a zero sample rate, a non-positive duration or a
/// request above [`MAX_SAMPLE_COUNT`] samples produces an empty signal.
pub fn generate_sine_wave(frequency: f64, amplitude: f64, duration: f64, sample_rate: u32) -> Signal {
    let count = sample_count(sample_rate, duration);
    let rate = sample_rate as f64;
    let samples = (0..count)
        .map(|i| {
            let t = i as f64 / rate;
            amplitude * (2.0 * PI * frequency * t).sin()
        })
        .collect();
    Signal::new(samples)
}

impl WaveParams {
    pub fn generate(&self) -> Signal {
        generate_sine_wave(self.frequency, self.amplitude, self.duration, self.sample_rate)
    }
}
