//! Commands sent to the browser side of the bridge.

use serde::{Deserialize, Serialize};

use reado_core::types::notification::NotificationOptions;

/// A platform call the browser side must carry out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum HostCommand {
    /// Show (or replace) a notification.
    ShowNotification {
        /// Notification id.
        id: String,
        /// Content and buttons.
        options: NotificationOptions,
    },
    /// Clear a notification.
    ClearNotification {
        /// Notification id.
        id: String,
    },
    /// Open a URL in a new tab.
    OpenTab {
        /// URL to open.
        url: String,
    },
    /// Register a page context-menu entry.
    CreateContextMenu {
        /// Entry id.
        id: String,
        /// Entry label.
        title: String,
    },
}
