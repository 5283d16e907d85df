pub mod log;
pub mod metrics;
pub mod summary;

pub use log::LogManager;
pub use metrics::LogCounters;
pub use summary::SignalSummary;
