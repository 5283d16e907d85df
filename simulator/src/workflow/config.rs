use anyhow::Context;
use oscillograph::acceptance::{AcceptanceCheck, AmplitudeRange, ACCEPTANCE_RANGE};
use oscillograph::WaveParams;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Randomized amplitude sweep appended after the fixed waves.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub count: usize,
    pub frequency: f64,
    pub duration: f64,
    pub seed: u64,
    pub draw: AmplitudeRange,
    pub accept: AmplitudeRange,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            count: 5,
            frequency: 5.0,
            duration: 1.0,
            seed: 0,
            draw: ACCEPTANCE_RANGE,
            accept: ACCEPTANCE_RANGE,
        }
    }
}

impl SweepConfig {
    pub fn to_check(&self) -> anyhow::Result<AcceptanceCheck> {
        AcceptanceCheck::new(self.draw, self.accept).context("building sweep acceptance check")
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub waves: Vec<WaveParams>,
    pub sweep: Option<SweepConfig>,
    pub clear_after: bool,
}

impl SessionConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading session config {}", path_ref.display()))?;
        let config: SessionConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing session config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(wave: Option<WaveParams>, sweep: Option<SweepConfig>, clear_after: bool) -> Self {
        Self {
            waves: wave.into_iter().collect(),
            sweep,
            clear_after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_holds_single_wave() {
        let cfg = SessionConfig::from_args(Some(WaveParams::new(5.0, 1.0, 1.0)), None, false);
        assert_eq!(cfg.waves.len(), 1);
        assert_eq!(cfg.waves[0].sample_rate, 1000);
        assert!(cfg.sweep.is_none());
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"waves:\n  - frequency: 5\n    amplitude: 1\n    duration: 1\n  - frequency: 10\n    amplitude: 0.5\n    duration: 1\n    sample_rate: 2000\nsweep:\n  count: 3\n  seed: 9\nclear_after: true\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = SessionConfig::load(&path).unwrap();

        assert_eq!(cfg.waves.len(), 2);
        assert_eq!(cfg.waves[0].sample_rate, 1000);
        assert_eq!(cfg.waves[1].sample_rate, 2000);
        let sweep = cfg.sweep.unwrap();
        assert_eq!(sweep.count, 3);
        assert_eq!(sweep.seed, 9);
        assert_eq!(sweep.draw, ACCEPTANCE_RANGE);
        assert!(cfg.clear_after);
    }

    #[test]
    fn config_load_reports_missing_file() {
        let err = SessionConfig::load("does/not/exist.yaml").unwrap_err();
        assert!(err.to_string().contains("reading session config"));
    }

    #[test]
    fn inverted_sweep_range_is_rejected() {
        let sweep = SweepConfig {
            draw: AmplitudeRange { min: 2.0, max: 1.0 },
            ..Default::default()
        };
        assert!(sweep.to_check().is_err());
    }
}
