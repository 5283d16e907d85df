pub mod sine;

pub use sine::{generate_sine_wave, sample_count, MAX_SAMPLE_COUNT};
