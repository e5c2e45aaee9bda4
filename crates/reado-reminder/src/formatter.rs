//! Reminder notification content.

use reado_core::config::ReminderConfig;
use reado_core::types::notification::NotificationOptions;
use reado_entity::SavedItem;

/// Title of every reminder notification.
pub const REMINDER_TITLE: &str = "Reado: 该阅读了!";

/// Label of the open button (index 0).
pub const OPEN_BUTTON: &str = "打开页面";

/// Icon bundled with the extension.
pub const ICON_URL: &str = "assets/icon128.png";

/// Highest platform priority, so reminders stay visible.
const REMINDER_PRIORITY: i8 = 2;

/// Builds notification options for reminder fires.
#[derive(Debug, Clone)]
pub struct NotificationFormatter {
    snooze_label: String,
}

impl NotificationFormatter {
    /// Create a formatter whose snooze button reflects the configured delay.
    pub fn new(config: &ReminderConfig) -> Self {
        Self {
            snooze_label: snooze_label(config.snooze_minutes),
        }
    }

    /// Label of the snooze button (index 1).
    pub fn snooze_label(&self) -> &str {
        &self.snooze_label
    }

    /// Notification for a fired reminder on `item`.
    pub fn reminder(&self, item: &SavedItem) -> NotificationOptions {
        NotificationOptions {
            title: REMINDER_TITLE.to_string(),
            message: item.notification_message().to_string(),
            icon_url: ICON_URL.to_string(),
            buttons: vec![OPEN_BUTTON.to_string(), self.snooze_label.clone()],
            priority: REMINDER_PRIORITY,
        }
    }
}

fn snooze_label(minutes: u32) -> String {
    if minutes > 0 && minutes % 60 == 0 {
        format!("推迟 {}小时", minutes / 60)
    } else {
        format!("推迟 {minutes}分钟")
    }
}
