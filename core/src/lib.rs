//! Core of the oscillograph workspace.
//!
//! Generates sampled sine waves, records them in a caller-owned log and
//! checks randomly drawn amplitudes against an acceptance range.

pub mod acceptance;
pub mod generator;
pub mod math;
pub mod prelude;
pub mod recording;
pub mod telemetry;

pub use generator::generate_sine_wave;
pub use prelude::{Signal, SignalError, SignalResult, WaveParams};
pub use recording::{SharedSignalLog, SignalLog};
