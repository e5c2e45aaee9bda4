//! Events delivered by the host platform.
//!
//! The host hands Reado one event at a time. Each variant maps to one
//! listener in the notification lifecycle handler.

use serde::{Deserialize, Serialize};

use crate::types::time::EpochMillis;

/// Union of all host events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    /// The extension was installed or updated.
    Installed,
    /// An alarm fired.
    AlarmFired {
        /// The alarm name.
        name: String,
        /// When the alarm was scheduled to fire.
        #[serde(rename = "scheduledTime")]
        scheduled_time: EpochMillis,
    },
    /// The body of a notification was clicked.
    NotificationClicked {
        /// The notification id.
        #[serde(rename = "notificationId")]
        notification_id: String,
    },
    /// A notification button was clicked.
    NotificationButtonClicked {
        /// The notification id.
        #[serde(rename = "notificationId")]
        notification_id: String,
        /// Index of the clicked button.
        #[serde(rename = "buttonIndex")]
        button_index: u32,
    },
    /// A notification was closed.
    NotificationClosed {
        /// The notification id.
        #[serde(rename = "notificationId")]
        notification_id: String,
        /// Whether the user closed it (as opposed to the system).
        #[serde(rename = "byUser")]
        by_user: bool,
    },
    /// A page finished loading.
    PageLoaded {
        /// The resolved URL of the page.
        url: String,
    },
    /// A context-menu entry was invoked on a page.
    ContextMenuClicked {
        /// The menu entry id.
        #[serde(rename = "menuItemId")]
        menu_item_id: String,
        /// URL of the page the menu was opened on.
        url: String,
        /// Title of that page.
        title: String,
    },
}

impl HostEvent {
    /// Short event name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Installed => "installed",
            Self::AlarmFired { .. } => "alarm_fired",
            Self::NotificationClicked { .. } => "notification_clicked",
            Self::NotificationButtonClicked { .. } => "notification_button_clicked",
            Self::NotificationClosed { .. } => "notification_closed",
            Self::PageLoaded { .. } => "page_loaded",
            Self::ContextMenuClicked { .. } => "context_menu_clicked",
        }
    }
}
