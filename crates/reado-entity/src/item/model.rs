//! Saved item entity model.

use serde::{Deserialize, Serialize};

use reado_core::types::time::EpochMillis;

/// Message shown in a reminder notification when the page has no title.
pub const UNTITLED_MESSAGE: &str = "你有一个保存的页面需要阅读。";

/// A bookmarked page and its reminder/read state. One record per URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    /// Page URL; also the record's identity.
    pub url: String,
    /// Page title at save time.
    #[serde(default)]
    pub title: String,
    /// When the item was saved.
    #[serde(default)]
    pub saved_at: EpochMillis,
    /// Whether the page has been read.
    #[serde(default)]
    pub read: bool,
    /// When the item transitioned to read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_at: Option<EpochMillis>,
    /// Fire time of the currently scheduled reminder, if any.
    #[serde(default)]
    pub reminder: Option<EpochMillis>,
    /// First reminder time ever set. Never overwritten once set.
    #[serde(default)]
    pub original_reminder: Option<EpochMillis>,
    /// Automatic reminder fires delivered since the last user action.
    #[serde(default)]
    pub reminder_count: u32,
    /// When the last reminder notification was shown.
    #[serde(default)]
    pub last_notification_time: Option<EpochMillis>,
    /// Tags in the case they were entered.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SavedItem {
    /// A fresh unread item with no reminder.
    pub fn new(url: impl Into<String>, title: impl Into<String>, saved_at: EpochMillis) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            saved_at,
            read: false,
            read_at: None,
            reminder: None,
            original_reminder: None,
            reminder_count: 0,
            last_notification_time: None,
            tags: Vec::new(),
        }
    }

    /// A fresh record replacing `previous` on a re-save. Everything resets
    /// except the first reminder ever set.
    pub fn resaved(
        previous: Option<&SavedItem>,
        url: impl Into<String>,
        title: impl Into<String>,
        saved_at: EpochMillis,
    ) -> Self {
        let mut item = Self::new(url, title, saved_at);
        item.original_reminder = previous.and_then(|p| p.original_reminder);
        item
    }

    /// Set the pending reminder. The first reminder ever set is also kept
    /// as the original reminder.
    pub fn set_reminder(&mut self, at: EpochMillis) {
        self.reminder = Some(at);
        if self.original_reminder.is_none() {
            self.original_reminder = Some(at);
        }
    }

    /// Mark the item read at `now` and drop any pending reminder.
    pub fn mark_read(&mut self, now: EpochMillis) {
        self.read = true;
        self.read_at = Some(now);
        self.reminder = None;
    }

    /// Whether the pending reminder is in the past and the item unread.
    pub fn is_overdue(&self, now: EpochMillis) -> bool {
        !self.read && self.reminder.is_some_and(|r| r < now)
    }

    /// Notification message: the title, or a generic line when it is blank.
    pub fn notification_message(&self) -> &str {
        if self.title.trim().is_empty() {
            UNTITLED_MESSAGE
        } else {
            &self.title
        }
    }

    /// Whether the record is a listable item (has both URL and title).
    pub fn is_listable(&self) -> bool {
        !self.url.is_empty() && !self.title.is_empty()
    }
}
