//! Shared fixture for unit tests.

use std::sync::Arc;

use reado_core::config::ReminderConfig;
use reado_entity::SavedItem;
use reado_host::{
    ManualAlarmService, ManualClock, RecordingMenuHost, RecordingNotificationService,
    RecordingTabService,
};
use reado_store::memory::MemoryKeyValueStore;
use reado_store::{ItemStore, SettingsStore};

use crate::handler::NotificationLifecycleHandler;
use crate::scheduler::ReminderScheduler;

/// 2024-03-01T00:00:00Z.
pub const T0: i64 = 1_709_251_200_000;

pub struct Fixture {
    pub clock: ManualClock,
    pub alarms: ManualAlarmService,
    pub notifications: RecordingNotificationService,
    pub tabs: RecordingTabService,
    pub menus: RecordingMenuHost,
    pub items: ItemStore,
    pub settings: SettingsStore,
    pub scheduler: ReminderScheduler,
    pub handler: NotificationLifecycleHandler,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_config(ReminderConfig::default())
    }

    pub fn with_config(config: ReminderConfig) -> Self {
        let backend = Arc::new(MemoryKeyValueStore::new());
        let clock = ManualClock::new(T0);
        let alarms = ManualAlarmService::new();
        let notifications = RecordingNotificationService::new();
        let tabs = RecordingTabService::new();
        let menus = RecordingMenuHost::new();
        let items = ItemStore::new(backend.clone());
        let settings = SettingsStore::new(backend);

        let scheduler = ReminderScheduler::new(
            Arc::new(alarms.clone()),
            items.clone(),
            settings.clone(),
            Arc::new(clock.clone()),
            config,
        );
        let handler = NotificationLifecycleHandler::new(
            scheduler.clone(),
            Arc::new(notifications.clone()),
            Arc::new(tabs.clone()),
            Arc::new(menus.clone()),
        );

        Self {
            clock,
            alarms,
            notifications,
            tabs,
            menus,
            items,
            settings,
            scheduler,
            handler,
        }
    }

    /// Store an unread item with a pending reminder at `at` and a live alarm.
    pub async fn saved_with_reminder(&self, url: &str, at: i64) -> SavedItem {
        let mut item = SavedItem::new(url, "Some article", T0);
        item.set_reminder(at);
        self.items.put(&item).await.unwrap();
        self.scheduler.schedule_reminder(url, at).await.unwrap();
        item
    }

    pub async fn item(&self, url: &str) -> SavedItem {
        self.items.get(url).await.unwrap().expect("item should exist")
    }
}
