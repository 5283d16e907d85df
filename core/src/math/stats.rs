pub struct StatsHelper;

impl StatsHelper {
    pub fn rms(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = samples.iter().map(|&v| v * v).sum();
        (sum_sq / samples.len() as f64).sqrt()
    }

    /// Largest absolute sample value, zero for an empty slice.
    pub fn peak(samples: &[f64]) -> f64 {
        samples.iter().fold(0.0, |acc: f64, &v| acc.max(v.abs()))
    }
}
