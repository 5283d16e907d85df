pub mod range;
pub mod source;
pub mod sweep;

pub use range::{AmplitudeRange, ACCEPTANCE_RANGE, REFERENCE_DRAW_RANGE};
pub use source::{AmplitudeSource, UniformAmplitudes};
pub use sweep::{AcceptanceCheck, SweepReport};
