use crate::acceptance::range::AmplitudeRange;
use crate::prelude::SignalResult;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Supplies amplitudes for randomized sweeps.
pub trait AmplitudeSource {
    fn next_amplitude(&mut self) -> f64;
}

/// Draws amplitudes uniformly from a closed interval.
pub struct UniformAmplitudes<R: Rng> {
    range: AmplitudeRange,
    rng: R,
}

impl<R: Rng> UniformAmplitudes<R> {
    pub fn new(range: AmplitudeRange, rng: R) -> SignalResult<Self> {
        Ok(Self {
            range: range.validated()?,
            rng,
        })
    }

    pub fn range(&self) -> AmplitudeRange {
        self.range
    }
}

impl UniformAmplitudes<StdRng> {
    pub fn seeded(range: AmplitudeRange, seed: u64) -> SignalResult<Self> {
        Self::new(range, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AmplitudeSource for UniformAmplitudes<R> {
    fn next_amplitude(&mut self) -> f64 {
        self.rng.gen_range(self.range.min..=self.range.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acceptance::range::REFERENCE_DRAW_RANGE;

    #[test]
    fn draws_stay_in_range() {
        let mut source = UniformAmplitudes::seeded(REFERENCE_DRAW_RANGE, 7).unwrap();
        for _ in 0..1000 {
            assert!(REFERENCE_DRAW_RANGE.contains(source.next_amplitude()));
        }
    }

    #[test]
    fn same_seed_repeats_draws() {
        let mut a = UniformAmplitudes::seeded(REFERENCE_DRAW_RANGE, 42).unwrap();
        let mut b = UniformAmplitudes::seeded(REFERENCE_DRAW_RANGE, 42).unwrap();
        for _ in 0..16 {
            assert_eq!(a.next_amplitude(), b.next_amplitude());
        }
    }

    #[test]
    fn degenerate_range_yields_constant() {
        let range = AmplitudeRange::new(1.5, 1.5).unwrap();
        let mut source = UniformAmplitudes::seeded(range, 1).unwrap();
        assert_eq!(source.next_amplitude(), 1.5);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let range = AmplitudeRange { min: 3.0, max: 1.0 };
        assert!(UniformAmplitudes::seeded(range, 0).is_err());
    }
}
