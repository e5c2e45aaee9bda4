//! Wall-clock source.

use crate::types::time::EpochMillis;

/// Source of the current wall-clock time in epoch milliseconds.
pub trait Clock: Send + Sync + std::fmt::Debug + 'static {
    /// The current time.
    fn now_millis(&self) -> EpochMillis;
}
