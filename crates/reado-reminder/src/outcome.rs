//! Reminder state transitions.

use reado_core::types::alarm::AlarmKind;
use reado_core::types::time::EpochMillis;

/// A transition applied to one saved item and its alarms by
/// [`ReminderScheduler::apply_reminder_outcome`](crate::scheduler::ReminderScheduler::apply_reminder_outcome).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderOutcome {
    /// A reminder was chosen when saving: schedule it at `at`.
    Scheduled {
        /// Fire time.
        at: EpochMillis,
    },
    /// A reminder fired: schedule the next repeat, up to the count cap.
    Recurred,
    /// The user snoozed the notification.
    Snoozed,
    /// The user opened the page from the notification.
    Opened,
    /// The page was read some other way (visited, or marked by hand).
    MarkedRead,
    /// The item was deleted.
    Deleted,
    /// The page was saved again, or for the first time. The record is
    /// replaced by a fresh unread one; only the first reminder survives.
    Resaved {
        /// Page title.
        title: String,
        /// Parsed tags.
        tags: Vec<String>,
    },
}

impl ReminderOutcome {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scheduled { .. } => "scheduled",
            Self::Recurred => "recurred",
            Self::Snoozed => "snoozed",
            Self::Opened => "opened",
            Self::MarkedRead => "marked_read",
            Self::Deleted => "deleted",
            Self::Resaved { .. } => "resaved",
        }
    }

    /// Alarms cleared before anything is created or persisted.
    pub fn cancels(&self) -> &'static [AlarmKind] {
        match self {
            Self::Scheduled { .. } | Self::Recurred => &[],
            Self::Snoozed => &[AlarmKind::Dismiss],
            Self::Opened => &[AlarmKind::Dismiss, AlarmKind::Reminder],
            Self::MarkedRead => &[AlarmKind::Reminder],
            Self::Deleted | Self::Resaved { .. } => &[AlarmKind::Reminder, AlarmKind::Dismiss],
        }
    }
}
