use serde::Serialize;

/// Activity counters carried by a signal log.
///
/// `recorded` counts every signal ever recorded, so unlike the log length
/// it survives a clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LogCounters {
    pub recorded: usize,
    pub clears: usize,
}

impl LogCounters {
    pub(crate) fn count_record(&mut self) {
        self.recorded += 1;
    }

    pub(crate) fn count_clear(&mut self) {
        self.clears += 1;
    }
}
