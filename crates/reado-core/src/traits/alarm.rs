//! Alarm service trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;
use crate::types::time::EpochMillis;

/// A live one-shot alarm as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alarm {
    /// Unique alarm name.
    pub name: String,
    /// Wall-clock time the alarm fires at, in epoch milliseconds.
    pub scheduled_time: EpochMillis,
}

/// Platform alarm scheduler.
///
/// Alarm names are unique: creating an alarm under an existing name
/// replaces it. Fired alarms are delivered as
/// [`HostEvent::AlarmFired`](crate::events::HostEvent::AlarmFired) and are
/// no longer live afterwards.
#[async_trait]
pub trait AlarmService: Send + Sync + std::fmt::Debug + 'static {
    /// Create or overwrite the alarm `name` to fire at `when`.
    async fn create(&self, name: &str, when: EpochMillis) -> AppResult<()>;

    /// Clear the alarm `name`. Returns `true` if an alarm was removed.
    async fn clear(&self, name: &str) -> AppResult<bool>;

    /// Look up a live alarm by name.
    async fn get(&self, name: &str) -> AppResult<Option<Alarm>>;
}
