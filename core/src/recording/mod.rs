pub mod shared;
pub mod signal_log;

pub use shared::SharedSignalLog;
pub use signal_log::SignalLog;
