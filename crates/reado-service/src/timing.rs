//! Reminder timing descriptions shown next to a saved item.

use std::fmt;

use serde::Serialize;

use reado_core::types::time::{self, EpochMillis, HOUR_MILLIS, MINUTE_MILLIS};
use reado_entity::SavedItem;

/// Render a duration as `X小时Y分`.
///
/// Hours appear only when non-zero, minutes likewise; a duration under one
/// minute reads `少许`. Negative durations are rendered by magnitude.
pub fn format_duration(millis: i64) -> String {
    let millis = millis.unsigned_abs();
    let hour = HOUR_MILLIS.unsigned_abs();
    let hours = millis / hour;
    let mins = (millis % hour) / MINUTE_MILLIS.unsigned_abs();

    let mut text = String::new();
    if hours > 0 {
        text.push_str(&format!("{hours}小时"));
    }
    if mins > 0 {
        text.push_str(&format!("{mins}分"));
    }
    if text.is_empty() {
        text.push_str("少许");
    }
    text
}

/// Local rendering of a timestamp for display.
pub fn format_timestamp(millis: EpochMillis) -> String {
    match time::to_local(millis) {
        Some(dt) => dt.format("%Y/%m/%d %H:%M:%S").to_string(),
        None => millis.to_string(),
    }
}

/// How the actual read or current reminder relates to the first reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "millis", rename_all = "snake_case")]
pub enum TimingDelta {
    /// Read this long after the original reminder.
    Late(i64),
    /// Read this long before the original reminder.
    Early(i64),
    /// Unread, with the reminder pushed this far past the original.
    Postponed(i64),
}

impl fmt::Display for TimingDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Late(ms) => write!(f, "延迟{}", format_duration(*ms)),
            Self::Early(ms) => write!(f, "提前{}", format_duration(*ms)),
            Self::Postponed(ms) => write!(f, "延期{}", format_duration(*ms)),
        }
    }
}

/// Timing facts about one saved item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingFacts {
    /// Currently scheduled reminder.
    pub reminder: Option<EpochMillis>,
    /// First reminder, present only when it differs from `reminder`.
    pub original_reminder: Option<EpochMillis>,
    /// When the item was read, if it was read after a reminder was set.
    pub read_at: Option<EpochMillis>,
    /// Lateness, earliness or postponement against the first reminder.
    pub delta: Option<TimingDelta>,
}

impl TimingFacts {
    /// Display fragments, in dashboard order.
    pub fn parts(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if let Some(at) = self.reminder {
            parts.push(format!("提醒: {}", format_timestamp(at)));
        }
        if let Some(at) = self.original_reminder {
            let label = if self.reminder.is_none() && self.read_at.is_some() {
                "原定"
            } else {
                "原始"
            };
            parts.push(format!("{label}: {}", format_timestamp(at)));
        }
        if let Some(at) = self.read_at {
            parts.push(format!("已读: {}", format_timestamp(at)));
        }
        if let Some(delta) = &self.delta {
            parts.push(delta.to_string());
        }
        parts
    }
}

impl fmt::Display for TimingFacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts().join(" • "))
    }
}

/// Describe `item`'s reminder timing.
pub fn describe_timing(item: &SavedItem) -> TimingFacts {
    let mut facts = TimingFacts {
        reminder: item.reminder,
        ..TimingFacts::default()
    };

    let Some(original) = item.original_reminder else {
        return facts;
    };
    if item.reminder == Some(original) {
        return facts;
    }
    facts.original_reminder = Some(original);

    if item.read {
        if let Some(read_at) = item.read_at {
            facts.read_at = Some(read_at);
            let diff = read_at - original;
            facts.delta = match diff.signum() {
                1 => Some(TimingDelta::Late(diff)),
                -1 => Some(TimingDelta::Early(-diff)),
                _ => None,
            };
        }
    } else if let Some(reminder) = item.reminder.filter(|r| *r > original) {
        facts.delta = Some(TimingDelta::Postponed(reminder - original));
    }

    facts
}
