//! Global settings record.

use serde::{Deserialize, Serialize};

/// User settings stored in the reserved settings record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Minutes between automatic repeat reminders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_reminder_interval: Option<u32>,
    /// Earlier name of `repeat_reminder_interval`. Read, never written.
    #[serde(default, skip_serializing)]
    pub second_reminder_interval: Option<u32>,
}

impl Settings {
    /// Settings carrying only a repeat interval.
    pub fn with_repeat_interval(minutes: u32) -> Self {
        Self {
            repeat_reminder_interval: Some(minutes),
            second_reminder_interval: None,
        }
    }

    /// Effective repeat interval in minutes.
    ///
    /// A zero value counts as unset, so the legacy field and then `default`
    /// apply.
    pub fn repeat_interval_minutes(&self, default: u32) -> u32 {
        self.repeat_reminder_interval
            .filter(|m| *m > 0)
            .or(self.second_reminder_interval.filter(|m| *m > 0))
            .unwrap_or(default)
    }
}
