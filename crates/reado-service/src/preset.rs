//! Reminder presets offered when saving a page.

use chrono::{DateTime, Days, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use reado_core::config::ReminderConfig;
use reado_core::types::time::{self, EpochMillis};

/// Accepted layouts for a custom reminder time, in local time.
const CUSTOM_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// When to be reminded of a saved page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "preset", content = "at", rename_all = "snake_case")]
pub enum ReminderPreset {
    /// A fixed delay from now.
    Later,
    /// This evening, or tomorrow evening once that hour has passed.
    Tonight,
    /// Tomorrow morning.
    Tomorrow,
    /// A user-entered local date-time, `YYYY-MM-DDTHH:MM[:SS]`.
    Custom(String),
}

impl ReminderPreset {
    /// Resolve the preset to a fire time relative to `now`.
    ///
    /// Returns `None` when a custom value does not parse or names a local
    /// time that does not exist.
    pub fn resolve(&self, now: EpochMillis, config: &ReminderConfig) -> Option<EpochMillis> {
        match self {
            Self::Later => Some(now + time::minutes(config.later_minutes)),
            Self::Tonight => {
                let today = time::to_local(now)?.date_naive();
                let tonight = local_at(today, config.tonight_hour)?;
                if tonight > now {
                    Some(tonight)
                } else {
                    local_at(today.checked_add_days(Days::new(1))?, config.tonight_hour)
                }
            }
            Self::Tomorrow => {
                let tomorrow = time::to_local(now)?
                    .date_naive()
                    .checked_add_days(Days::new(1))?;
                local_at(tomorrow, config.tomorrow_hour)
            }
            Self::Custom(raw) => parse_custom(raw),
        }
    }
}

fn local_at(date: NaiveDate, hour: u32) -> Option<EpochMillis> {
    let naive = date.and_hms_opt(hour, 0, 0)?;
    from_local(naive).map(|dt| dt.timestamp_millis())
}

fn from_local(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    Local.from_local_datetime(&naive).earliest()
}

fn parse_custom(raw: &str) -> Option<EpochMillis> {
    let raw = raw.trim();
    CUSTOM_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(from_local)
        .map(|dt| dt.timestamp_millis())
}
