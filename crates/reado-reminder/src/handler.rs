//! Notification lifecycle handler.
//!
//! Reacts to host events: alarm fires, notification clicks and button
//! presses, user-closed notifications, finished page loads and the save
//! context-menu entry. Each reminder notification moves its URL from idle
//! to shown and back. No event ever fails: missing records and platform
//! errors are logged and the event is dropped.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use reado_core::events::HostEvent;
use reado_core::traits::menu::ContextMenuHost;
use reado_core::traits::notification::NotificationService;
use reado_core::traits::tabs::TabService;
use reado_core::types::notification::NotificationAction;

use crate::formatter::NotificationFormatter;
use crate::outcome::ReminderOutcome;
use crate::scheduler::{AlarmFireHandler, ReminderScheduler};

/// Id of the page context-menu entry that saves the current page.
pub const SAVE_PAGE_MENU_ID: &str = "save-page";

/// Title of the save context-menu entry.
pub const SAVE_PAGE_MENU_TITLE: &str = "保存到 Reado";

/// Event handler driving the reminder notification lifecycle.
#[derive(Debug, Clone)]
pub struct NotificationLifecycleHandler {
    scheduler: ReminderScheduler,
    notifications: Arc<dyn NotificationService>,
    tabs: Arc<dyn TabService>,
    menus: Arc<dyn ContextMenuHost>,
    formatter: NotificationFormatter,
}

impl NotificationLifecycleHandler {
    /// Create a handler over the given scheduler and platform services.
    pub fn new(
        scheduler: ReminderScheduler,
        notifications: Arc<dyn NotificationService>,
        tabs: Arc<dyn TabService>,
        menus: Arc<dyn ContextMenuHost>,
    ) -> Self {
        let formatter = NotificationFormatter::new(scheduler.config());
        Self {
            scheduler,
            notifications,
            tabs,
            menus,
            formatter,
        }
    }

    /// The scheduler this handler drives.
    pub fn scheduler(&self) -> &ReminderScheduler {
        &self.scheduler
    }

    /// Handle one host event to completion.
    pub async fn handle(&self, event: HostEvent) {
        debug!(event = event.name(), "Handling host event");
        match event {
            HostEvent::Installed => self.register_menu().await,
            HostEvent::AlarmFired { name, .. } => self.scheduler.on_fire(&name, self).await,
            HostEvent::NotificationClicked { notification_id } => {
                self.open_page(&notification_id).await
            }
            HostEvent::NotificationButtonClicked {
                notification_id,
                button_index,
            } => match NotificationAction::from_button(button_index) {
                Some(NotificationAction::Open) => self.open_page(&notification_id).await,
                Some(NotificationAction::Snooze) => self.snooze(&notification_id).await,
                None => warn!(
                    id = %notification_id,
                    button_index,
                    "Ignoring unknown notification button"
                ),
            },
            HostEvent::NotificationClosed {
                notification_id,
                by_user,
            } => self.on_closed(&notification_id, by_user).await,
            HostEvent::PageLoaded { url } => self.on_page_loaded(&url).await,
            HostEvent::ContextMenuClicked {
                menu_item_id,
                url,
                title,
            } => {
                if menu_item_id == SAVE_PAGE_MENU_ID {
                    self.save_from_menu(&url, &title).await;
                } else {
                    debug!(menu_item_id, "Ignoring unknown context menu entry");
                }
            }
        }
    }

    async fn register_menu(&self) {
        match self
            .menus
            .create(SAVE_PAGE_MENU_ID, SAVE_PAGE_MENU_TITLE)
            .await
        {
            Ok(()) => info!(id = SAVE_PAGE_MENU_ID, "Context menu registered"),
            Err(e) => error!(error = %e, "Failed to register context menu"),
        }
    }

    /// Body click or the open button: mark read, open the tab, close the
    /// notification.
    async fn open_page(&self, url: &str) {
        self.apply(url, ReminderOutcome::Opened).await;

        if let Err(e) = self.tabs.open(url).await {
            error!(url, error = %e, "Failed to open tab");
        }
        self.clear_notification(url).await;
    }

    async fn snooze(&self, url: &str) {
        self.apply(url, ReminderOutcome::Snoozed).await;
        self.clear_notification(url).await;
    }

    async fn on_closed(&self, url: &str, by_user: bool) {
        if !by_user {
            debug!(url, "Notification closed by the system");
            return;
        }
        if let Err(e) = self.scheduler.cancel_dismiss(url).await {
            warn!(url, error = %e, "Failed to cancel auto-dismiss");
        }
    }

    /// A visit to a saved unread page counts as reading it.
    async fn on_page_loaded(&self, url: &str) {
        match self.scheduler.items().get(url).await {
            Ok(Some(item)) if !item.read => {
                self.apply(url, ReminderOutcome::MarkedRead).await;
            }
            Ok(_) => {}
            Err(e) => error!(url, error = %e, "Failed to load saved item"),
        }
    }

    /// Save the page from the context menu with no reminder and no tags.
    async fn save_from_menu(&self, url: &str, title: &str) {
        let outcome = ReminderOutcome::Resaved {
            title: title.to_string(),
            tags: Vec::new(),
        };
        match self.scheduler.apply_reminder_outcome(url, outcome).await {
            Ok(_) => {
                info!(url, "Page saved from context menu");
                self.clear_notification(url).await;
            }
            Err(e) => error!(url, error = %e, "Failed to save page"),
        }
    }

    async fn apply(&self, url: &str, outcome: ReminderOutcome) {
        let name = outcome.name();
        match self.scheduler.apply_reminder_outcome(url, outcome).await {
            Ok(Some(_)) => {}
            Ok(None) => info!(url, outcome = name, "No saved item for URL"),
            Err(e) => error!(
                url,
                outcome = name,
                error = %e,
                "Failed to apply reminder outcome"
            ),
        }
    }

    async fn clear_notification(&self, url: &str) {
        if let Err(e) = self.notifications.clear(url).await {
            warn!(url, error = %e, "Failed to clear notification");
        }
    }
}

#[async_trait]
impl AlarmFireHandler for NotificationLifecycleHandler {
    async fn on_reminder_alarm(&self, url: &str) {
        let item = match self.scheduler.items().get(url).await {
            Ok(Some(item)) if item.read => {
                info!(url, "Reminder fired for an item already read");
                return;
            }
            Ok(Some(item)) => item,
            Ok(None) => {
                info!(url, "Reminder fired for an item that is no longer saved");
                return;
            }
            Err(e) => {
                error!(url, error = %e, "Failed to load saved item");
                return;
            }
        };

        let options = self.formatter.reminder(&item);
        match self.notifications.create(url, &options).await {
            Ok(id) => {
                info!(url, id, count = item.reminder_count, "Reminder shown");
                if let Err(e) = self.scheduler.schedule_auto_dismiss(url).await {
                    warn!(url, error = %e, "Failed to schedule auto-dismiss");
                }
            }
            Err(e) => error!(url, error = %e, "Failed to show reminder"),
        }

        self.apply(url, ReminderOutcome::Recurred).await;
    }

    async fn on_dismiss_alarm(&self, url: &str) {
        match self.notifications.clear(url).await {
            Ok(true) => debug!(url, "Notification auto-dismissed"),
            Ok(false) => debug!(url, "Auto-dismiss found no open notification"),
            Err(e) => warn!(url, error = %e, "Failed to auto-dismiss notification"),
        }
    }
}
