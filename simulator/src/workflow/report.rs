use anyhow::Context;
use oscillograph::acceptance::SweepReport;
use oscillograph::telemetry::{LogCounters, SignalSummary};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Everything a session produced, in the shape written to `--report`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResult {
    pub recorded: usize,
    pub waves: Vec<SignalSummary>,
    pub last: Option<SignalSummary>,
    pub sweep: Option<SweepReport>,
    pub cleared: bool,
    pub counters: LogCounters,
}

impl SessionResult {
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path_ref = path.as_ref();
        if let Some(parent) = path_ref.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
        let body = serde_json::to_string_pretty(self).context("serializing session report")?;
        fs::write(path_ref, body)
            .with_context(|| format!("writing session report {}", path_ref.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::config::SessionConfig;
    use crate::workflow::runner::Runner;
    use oscillograph::WaveParams;
    use tempfile::tempdir;

    #[test]
    fn report_is_written_as_json() {
        let config = SessionConfig::from_args(Some(WaveParams::new(5.0, 1.0, 1.0)), None, true);
        let (result, _) = Runner::new(config).execute().unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("reports/session.json");
        result.write_json(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["recorded"], 1);
        assert_eq!(value["cleared"], true);
        assert_eq!(value["last"]["sample_count"], 1000);
        assert!(value["sweep"].is_null());
        assert_eq!(value["counters"]["clears"], 1);
    }
}
