//! Reminder scheduler. Owns the reminder and auto-dismiss alarms.
//!
//! Every change to an item's reminder state goes through
//! [`ReminderScheduler::apply_reminder_outcome`], which runs one ordered
//! pipeline: read the item, clear alarms, create alarms, persist. Clears
//! are best-effort. A failed create stops the pipeline before the store
//! write, so `reminder` is never persisted for an alarm that does not exist.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use reado_core::config::ReminderConfig;
use reado_core::result::AppResult;
use reado_core::traits::alarm::AlarmService;
use reado_core::traits::clock::Clock;
use reado_core::types::alarm::{AlarmKind, AlarmName};
use reado_core::types::time::{self, EpochMillis};
use reado_entity::SavedItem;
use reado_store::{ItemStore, SettingsStore};

use crate::outcome::ReminderOutcome;

/// Receives fired alarms after the scheduler has decoded their names.
#[async_trait]
pub trait AlarmFireHandler: Send + Sync {
    /// `reminder-<url>` fired.
    async fn on_reminder_alarm(&self, url: &str);

    /// `dismiss-<url>` fired.
    async fn on_dismiss_alarm(&self, url: &str);
}

/// Creates, cancels and dispatches the per-URL alarms.
#[derive(Debug, Clone)]
pub struct ReminderScheduler {
    alarms: Arc<dyn AlarmService>,
    items: ItemStore,
    settings: SettingsStore,
    clock: Arc<dyn Clock>,
    config: ReminderConfig,
}

impl ReminderScheduler {
    /// Create a scheduler.
    pub fn new(
        alarms: Arc<dyn AlarmService>,
        items: ItemStore,
        settings: SettingsStore,
        clock: Arc<dyn Clock>,
        config: ReminderConfig,
    ) -> Self {
        Self {
            alarms,
            items,
            settings,
            clock,
            config,
        }
    }

    /// The item store this scheduler persists to.
    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    /// Reminder timing configuration.
    pub fn config(&self) -> &ReminderConfig {
        &self.config
    }

    /// Current time from the scheduler's clock.
    pub fn now(&self) -> EpochMillis {
        self.clock.now_millis()
    }

    /// Create or overwrite `reminder-<url>` to fire at `when`.
    ///
    /// `when` is not validated; a past time fires right away.
    pub async fn schedule_reminder(&self, url: &str, when: EpochMillis) -> AppResult<()> {
        let name = AlarmName::reminder(url).to_string();
        self.alarms.create(&name, when).await?;
        debug!(alarm = %name, when, "Reminder alarm set");
        Ok(())
    }

    /// Create or overwrite `dismiss-<url>` using the configured delay.
    pub async fn schedule_auto_dismiss(&self, url: &str) -> AppResult<()> {
        self.schedule_auto_dismiss_in(url, self.config.auto_dismiss_millis())
            .await
    }

    /// Create or overwrite `dismiss-<url>` to fire `delay_millis` from now.
    pub async fn schedule_auto_dismiss_in(&self, url: &str, delay_millis: i64) -> AppResult<()> {
        let name = AlarmName::dismiss(url).to_string();
        self.alarms.create(&name, self.now() + delay_millis).await?;
        debug!(alarm = %name, delay_ms = delay_millis, "Auto-dismiss alarm set");
        Ok(())
    }

    /// Cancel `reminder-<url>`. Returns whether one was live.
    pub async fn cancel_reminder(&self, url: &str) -> AppResult<bool> {
        self.alarms.clear(&AlarmName::reminder(url).to_string()).await
    }

    /// Cancel `dismiss-<url>`. Returns whether one was live.
    pub async fn cancel_dismiss(&self, url: &str) -> AppResult<bool> {
        self.alarms.clear(&AlarmName::dismiss(url).to_string()).await
    }

    /// Decode a fired alarm's name and hand its URL to `handler`.
    /// Names outside the two alarm families are logged and ignored.
    pub async fn on_fire(&self, alarm_name: &str, handler: &dyn AlarmFireHandler) {
        match AlarmName::parse(alarm_name) {
            Some(AlarmName {
                kind: AlarmKind::Reminder,
                url,
            }) => handler.on_reminder_alarm(&url).await,
            Some(AlarmName {
                kind: AlarmKind::Dismiss,
                url,
            }) => handler.on_dismiss_alarm(&url).await,
            None => warn!(alarm = alarm_name, "Ignoring unknown alarm"),
        }
    }

    /// Apply a reminder transition to the item saved for `url`.
    ///
    /// Alarms named by [`ReminderOutcome::cancels`] are cleared even when
    /// no item exists. Returns the item as persisted (for `Deleted`, as it
    /// was before removal), or `None` when nothing is saved for `url`.
    /// `Resaved` is the one outcome that creates a missing record.
    pub async fn apply_reminder_outcome(
        &self,
        url: &str,
        outcome: ReminderOutcome,
    ) -> AppResult<Option<SavedItem>> {
        let item = self.items.get(url).await?;
        let existed = item.is_some();
        let now = self.now();

        for kind in outcome.cancels() {
            let name = AlarmName {
                kind: *kind,
                url: url.to_string(),
            };
            if let Err(e) = self.alarms.clear(&name.to_string()).await {
                warn!(alarm = %name, error = %e, "Failed to clear alarm");
            }
        }

        let mut item = match (&outcome, item) {
            (_, Some(item)) => item,
            (ReminderOutcome::Resaved { .. }, None) => SavedItem::new(url, "", now),
            (_, None) => {
                debug!(url, outcome = outcome.name(), "No saved item; nothing to update");
                return Ok(None);
            }
        };

        match outcome {
            ReminderOutcome::Scheduled { at } => {
                self.schedule_reminder(url, at).await?;
                self.verify_reminder(url).await;
                item.set_reminder(at);
                info!(url, at, "Reminder scheduled");
            }
            ReminderOutcome::Recurred => {
                if item.read {
                    debug!(url, "Item already read; not recurring");
                    return Ok(Some(item));
                }
                let max = self.config.reminder_cap();
                if item.reminder_count >= max {
                    // The alarm that just fired was the last one.
                    item.reminder = None;
                    self.items.put(&item).await?;
                    info!(url, max, "Max reminder count reached; no further auto-reminders");
                    return Ok(Some(item));
                }
                let next = now + self.repeat_interval_millis().await;
                self.schedule_reminder(url, next).await?;
                item.set_reminder(next);
                item.reminder_count += 1;
                item.last_notification_time = Some(now);
                info!(
                    url,
                    count = item.reminder_count,
                    max,
                    next,
                    "Optimistically scheduled next reminder"
                );
            }
            ReminderOutcome::Snoozed => {
                let until = now + self.config.snooze_millis();
                self.schedule_reminder(url, until).await?;
                item.set_reminder(until);
                item.reminder_count = 0;
                info!(url, until, "Reminder snoozed");
            }
            ReminderOutcome::Opened => {
                item.mark_read(now);
                item.reminder_count = 0;
                info!(url, "Opened from notification");
            }
            ReminderOutcome::MarkedRead => {
                item.mark_read(now);
                info!(url, "Marked as read");
            }
            ReminderOutcome::Deleted => {
                self.items.remove(url).await?;
                info!(url, "Saved item deleted");
                return Ok(Some(item));
            }
            ReminderOutcome::Resaved { title, tags } => {
                item = SavedItem::resaved(Some(&item), url, title, now);
                item.tags = tags;
                info!(url, tags = item.tags.len(), resave = existed, "Page saved");
            }
        }

        self.items.put(&item).await?;
        Ok(Some(item))
    }

    /// Re-create `reminder-<url>` for every unread item that has a pending
    /// reminder. Used when a host process starts with alarms from an
    /// earlier run gone; reminders already past fire right away. Returns
    /// how many alarms were armed.
    pub async fn restore_alarms(&self) -> AppResult<usize> {
        let mut armed = 0;
        for item in self.items.list().await? {
            let Some(at) = item.reminder.filter(|_| !item.read) else {
                continue;
            };
            match self.schedule_reminder(&item.url, at).await {
                Ok(()) => armed += 1,
                Err(e) => warn!(url = %item.url, error = %e, "Failed to restore reminder"),
            }
        }
        info!(armed, "Reminder alarms restored");
        Ok(armed)
    }

    /// Repeat interval from settings, falling back to configuration when the
    /// settings record is missing or unreadable.
    async fn repeat_interval_millis(&self) -> i64 {
        let default = self.config.default_repeat_interval_minutes;
        let minutes = match self.settings.get().await {
            Ok(settings) => settings.repeat_interval_minutes(default),
            Err(e) => {
                warn!(error = %e, "Failed to read settings; using default repeat interval");
                default
            }
        };
        time::minutes(minutes)
    }

    /// Check the platform reports the reminder alarm just created.
    async fn verify_reminder(&self, url: &str) {
        let name = AlarmName::reminder(url).to_string();
        match self.alarms.get(&name).await {
            Ok(Some(alarm)) => debug!(alarm = %alarm.name, at = alarm.scheduled_time, "Alarm verified"),
            Ok(None) => warn!(alarm = %name, "Alarm not found after creation"),
            Err(e) => error!(alarm = %name, error = %e, "Failed to verify alarm"),
        }
    }
}
