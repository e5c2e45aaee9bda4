//! Library operations over saved items and settings.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use reado_core::error::AppError;
use reado_core::result::AppResult;
use reado_core::traits::notification::NotificationService;
use reado_entity::item::parse_tags;
use reado_entity::{SavedItem, Settings};
use reado_reminder::{ReminderOutcome, ReminderScheduler};
use reado_store::{ItemStore, SettingsStore};

use crate::listing::{ListFilter, ListedItem};
use crate::preset::ReminderPreset;

/// Request to save (or re-save) a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRequest {
    /// Page URL.
    pub url: String,
    /// Page title.
    pub title: String,
    /// Raw tag input, comma separated.
    #[serde(default)]
    pub tags: String,
    /// Optional reminder preset.
    #[serde(default)]
    pub reminder: Option<ReminderPreset>,
}

/// Saves, lists, marks read and deletes pages.
#[derive(Debug, Clone)]
pub struct LibraryService {
    /// Reminder scheduler; owns the item store and alarms.
    scheduler: ReminderScheduler,
    /// Settings record.
    settings: SettingsStore,
    /// Notification service, when running next to a host.
    notifications: Option<Arc<dyn NotificationService>>,
}

impl LibraryService {
    /// Creates a new library service.
    pub fn new(scheduler: ReminderScheduler, settings: SettingsStore) -> Self {
        Self {
            scheduler,
            settings,
            notifications: None,
        }
    }

    /// Also clear open notifications when items are deleted.
    pub fn with_notifications(mut self, notifications: Arc<dyn NotificationService>) -> Self {
        self.notifications = Some(notifications);
        self
    }

    fn items(&self) -> &ItemStore {
        self.scheduler.items()
    }

    /// Save a page, replacing any previous record for its URL.
    ///
    /// A preset that resolves to no time (an unparseable custom value)
    /// saves the page without a reminder. A reminder alarm that cannot be
    /// created is logged and the page stays saved without a reminder.
    pub async fn save(&self, req: SaveRequest) -> AppResult<SavedItem> {
        let url = req.url.trim();
        if url.is_empty() {
            return Err(AppError::validation("URL cannot be empty"));
        }

        let now = self.scheduler.now();
        let outcome = ReminderOutcome::Resaved {
            title: req.title.trim().to_string(),
            tags: parse_tags(&req.tags),
        };
        let item = self
            .scheduler
            .apply_reminder_outcome(url, outcome)
            .await?
            .ok_or_else(|| AppError::internal(format!("Save of '{url}' produced no record")))?;
        self.clear_notification(url).await;

        let at = req
            .reminder
            .as_ref()
            .and_then(|preset| preset.resolve(now, self.scheduler.config()));
        if req.reminder.is_some() && at.is_none() {
            warn!(url, "Reminder time did not resolve; saved without reminder");
        }
        let Some(at) = at else {
            return Ok(item);
        };

        match self
            .scheduler
            .apply_reminder_outcome(url, ReminderOutcome::Scheduled { at })
            .await
        {
            Ok(Some(updated)) => Ok(updated),
            Ok(None) => Ok(item),
            Err(e) => {
                error!(url, error = %e, "Failed to schedule reminder");
                Ok(item)
            }
        }
    }

    /// Whether a record exists for `url`.
    pub async fn is_saved(&self, url: &str) -> AppResult<bool> {
        Ok(self.items().get(url).await?.is_some())
    }

    /// The record saved for `url`.
    pub async fn get(&self, url: &str) -> AppResult<SavedItem> {
        self.items()
            .get(url)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No saved item for '{url}'")))
    }

    /// The record saved for `url` with its listing facts.
    pub async fn entry(&self, url: &str) -> AppResult<ListedItem> {
        let item = self.get(url).await?;
        Ok(ListedItem::new(item, self.scheduler.now()))
    }

    /// Replace the tags of a saved item.
    pub async fn set_tags(&self, url: &str, raw: &str) -> AppResult<SavedItem> {
        let mut item = self.get(url).await?;
        item.tags = parse_tags(raw);
        self.items().put(&item).await?;
        Ok(item)
    }

    /// Mark a saved item read by hand.
    pub async fn mark_read(&self, url: &str) -> AppResult<SavedItem> {
        self.scheduler
            .apply_reminder_outcome(url, ReminderOutcome::MarkedRead)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No saved item for '{url}'")))
    }

    /// Delete a saved item with its alarms and notification. Returns
    /// whether a record existed.
    pub async fn delete(&self, url: &str) -> AppResult<bool> {
        let removed = self
            .scheduler
            .apply_reminder_outcome(url, ReminderOutcome::Deleted)
            .await?;

        self.clear_notification(url).await;
        Ok(removed.is_some())
    }

    async fn clear_notification(&self, url: &str) {
        if let Some(notifications) = &self.notifications {
            if let Err(e) = notifications.clear(url).await {
                warn!(url, error = %e, "Failed to clear notification");
            }
        }
    }

    /// List saved items matching `filter`.
    pub async fn list(&self, filter: &ListFilter) -> AppResult<Vec<ListedItem>> {
        let items = self.items().list().await?;
        Ok(filter.apply(items, self.scheduler.now()))
    }

    /// Effective repeat interval in minutes.
    pub async fn repeat_interval(&self) -> AppResult<u32> {
        let settings = self.settings.get().await?;
        Ok(settings.repeat_interval_minutes(
            self.scheduler.config().default_repeat_interval_minutes,
        ))
    }

    /// Store a new repeat interval.
    pub async fn set_repeat_interval(&self, minutes: u32) -> AppResult<Settings> {
        if minutes == 0 {
            return Err(AppError::validation(
                "Repeat interval must be at least one minute",
            ));
        }
        let settings = Settings::with_repeat_interval(minutes);
        self.settings.put(&settings).await?;
        info!(minutes, "Repeat interval updated");
        Ok(settings)
    }
}
