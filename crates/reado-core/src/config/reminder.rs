//! Reminder timing configuration.

use serde::{Deserialize, Serialize};

/// Hard ceiling on automatic reminder fires, whatever is configured.
pub const MAX_REMINDER_COUNT: u32 = 10;

/// Timing constants for reminders, notifications and save presets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// Repeat interval used when the stored settings carry none.
    #[serde(default = "default_repeat_interval")]
    pub default_repeat_interval_minutes: u32,
    /// Number of automatic reminder fires after which rescheduling stops.
    /// Values above [`MAX_REMINDER_COUNT`] are capped.
    #[serde(default = "default_max_reminder_count")]
    pub max_reminder_count: u32,
    /// Seconds a shown notification stays up before it is auto-cleared.
    #[serde(default = "default_auto_dismiss")]
    pub auto_dismiss_seconds: u64,
    /// Minutes a snooze pushes the reminder out.
    #[serde(default = "default_snooze")]
    pub snooze_minutes: u32,
    /// Minutes used by the "later" save preset.
    #[serde(default = "default_later")]
    pub later_minutes: u32,
    /// Local hour (0-23) used by the "tonight" save preset.
    #[serde(default = "default_tonight_hour")]
    pub tonight_hour: u32,
    /// Local hour (0-23) used by the "tomorrow" save preset.
    #[serde(default = "default_tomorrow_hour")]
    pub tomorrow_hour: u32,
}

impl ReminderConfig {
    /// Effective reminder count cap.
    pub fn reminder_cap(&self) -> u32 {
        self.max_reminder_count.min(MAX_REMINDER_COUNT)
    }

    /// Auto-dismiss delay in milliseconds.
    pub fn auto_dismiss_millis(&self) -> i64 {
        self.auto_dismiss_seconds as i64 * 1000
    }

    /// Snooze delay in milliseconds.
    pub fn snooze_millis(&self) -> i64 {
        self.snooze_minutes as i64 * 60_000
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            default_repeat_interval_minutes: default_repeat_interval(),
            max_reminder_count: default_max_reminder_count(),
            auto_dismiss_seconds: default_auto_dismiss(),
            snooze_minutes: default_snooze(),
            later_minutes: default_later(),
            tonight_hour: default_tonight_hour(),
            tomorrow_hour: default_tomorrow_hour(),
        }
    }
}

fn default_repeat_interval() -> u32 {
    60
}

fn default_max_reminder_count() -> u32 {
    MAX_REMINDER_COUNT
}

fn default_auto_dismiss() -> u64 {
    30
}

fn default_snooze() -> u32 {
    60
}

fn default_later() -> u32 {
    60
}

fn default_tonight_hour() -> u32 {
    20
}

fn default_tomorrow_hour() -> u32 {
    9
}
