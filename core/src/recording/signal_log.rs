use crate::prelude::Signal;
use crate::telemetry::log::LogManager;
use crate::telemetry::metrics::LogCounters;

/// Insertion-ordered record of generated signals.
///
/// Length only grows through [`SignalLog::record`] and only drops, to zero,
/// through [`SignalLog::clear`].
#[derive(Debug, Clone, Default)]
pub struct SignalLog {
    signals: Vec<Signal>,
    counters: LogCounters,
    logger: LogManager,
}

impl SignalLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `signal` to the end of the log.
    pub fn record(&mut self, signal: Signal) {
        self.logger.recorded(self.signals.len(), &signal);
        self.signals.push(signal);
        self.counters.count_record();
    }

    /// Most recently recorded signal, `None` when the log is empty.
    pub fn get_last(&self) -> Option<&Signal> {
        self.signals.last()
    }

    /// Removes every recorded signal. Clearing an empty log is a no-op.
    pub fn clear(&mut self) {
        self.logger.cleared(self.signals.len());
        self.signals.clear();
        self.counters.count_clear();
    }

    pub fn get(&self, index: usize) -> Option<&Signal> {
        self.signals.get(index)
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Signal> {
        self.signals.iter()
    }

    pub fn counters(&self) -> LogCounters {
        self.counters
    }
}

impl<'a> IntoIterator for &'a SignalLog {
    type Item = &'a Signal;
    type IntoIter = std::slice::Iter<'a, Signal>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
