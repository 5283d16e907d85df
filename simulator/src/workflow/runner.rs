use crate::workflow::config::SessionConfig;
use crate::workflow::report::SessionResult;
use anyhow::Context;
use log::info;
use oscillograph::telemetry::{LogManager, SignalSummary};
use oscillograph::SignalLog;

#[derive(Clone)]
pub struct Runner {
    config: SessionConfig,
    logger: LogManager,
}

impl Runner {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            logger: LogManager::new(),
        }
    }

    /// Generates and records every configured wave, then runs the sweep.
    /// The log is returned alongside the result so callers can inspect it.
    pub fn execute(&self) -> anyhow::Result<(SessionResult, SignalLog)> {
        let mut log = SignalLog::new();

        let mut waves = Vec::with_capacity(self.config.waves.len());
        for (index, params) in self.config.waves.iter().enumerate() {
            let signal = params.generate();
            let summary = SignalSummary::of(&signal);
            self.logger.summary(&format!("wave {}", index), &summary);
            waves.push(summary);
            log.record(signal);
        }

        let sweep = match &self.config.sweep {
            Some(sweep) => {
                let check = sweep.to_check()?;
                let mut source = check
                    .source(sweep.seed)
                    .context("seeding sweep amplitude source")?;
                let report = check.run(
                    &mut source,
                    sweep.count,
                    sweep.frequency,
                    sweep.duration,
                    &mut log,
                );
                info!(
                    "sweep of {} draws finished with {} violations",
                    report.amplitudes.len(),
                    report.violations.len()
                );
                Some(report)
            }
            None => None,
        };

        let recorded = log.len();
        let last = log.get_last().map(SignalSummary::of);
        if let Some(summary) = &last {
            self.logger.summary("last", summary);
        }

        if self.config.clear_after {
            log.clear();
        }

        Ok((
            SessionResult {
                recorded,
                waves,
                last,
                sweep,
                cleared: self.config.clear_after,
                counters: log.counters(),
            },
            log,
        ))
    }
}
