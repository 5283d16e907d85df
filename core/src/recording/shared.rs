use crate::prelude::Signal;
use crate::recording::signal_log::SignalLog;
use crate::telemetry::metrics::LogCounters;
use std::sync::Mutex;

/// Signal log that can be handed to several threads.
///
/// Every operation holds the one lock for its whole duration. A poisoned
/// lock makes mutations no-ops and reads report an empty log.
#[derive(Default)]
pub struct SharedSignalLog {
    inner: Mutex<SignalLog>,
}

impl SharedSignalLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, signal: Signal) {
        if let Ok(mut log) = self.inner.lock() {
            log.record(signal);
        }
    }

    /// Clone of the latest signal, `None` when the log is empty.
    pub fn get_last(&self) -> Option<Signal> {
        self.inner
            .lock()
            .ok()
            .and_then(|log| log.get_last().cloned())
    }

    pub fn clear(&self) {
        if let Ok(mut log) = self.inner.lock() {
            log.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|log| log.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn counters(&self) -> LogCounters {
        self.inner
            .lock()
            .map(|log| log.counters())
            .unwrap_or_default()
    }

    /// Consumes the shared wrapper and returns the plain log.
    pub fn into_inner(self) -> SignalLog {
        self.inner
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
