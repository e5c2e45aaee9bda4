//! Notification content passed to the platform.

use serde::{Deserialize, Serialize};

/// Options for a basic notification with buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationOptions {
    /// Bold heading line.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Icon shown next to the text.
    pub icon_url: String,
    /// Button labels, in index order.
    pub buttons: Vec<String>,
    /// Platform priority (-2..=2).
    pub priority: i8,
}

/// What a button index on a reminder notification means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationAction {
    /// Button 0: open the page.
    Open,
    /// Button 1: snooze the reminder.
    Snooze,
}

impl NotificationAction {
    /// Map a clicked button index to an action.
    pub fn from_button(index: u32) -> Option<Self> {
        match index {
            0 => Some(Self::Open),
            1 => Some(Self::Snooze),
            _ => None,
        }
    }
}
