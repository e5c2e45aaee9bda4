//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use reado_core::config::{ReminderConfig, StoreConfig};
use reado_core::events::HostEvent;
use reado_entity::SavedItem;
use reado_host::{
    ManualAlarmService, ManualClock, RecordingMenuHost, RecordingNotificationService,
    RecordingTabService,
};
use reado_reminder::{NotificationLifecycleHandler, ReminderScheduler};
use reado_service::LibraryService;
use reado_store::StoreManager;
use reado_store::memory::MemoryKeyValueStore;

/// 2024-03-01T00:00:00Z.
pub const T0: i64 = 1_709_251_200_000;

/// One minute in milliseconds.
pub const MINUTE: i64 = 60_000;

/// One hour in milliseconds.
pub const HOUR: i64 = 60 * MINUTE;

/// Test application: the full reminder engine over deterministic platform
/// services.
pub struct TestApp {
    pub clock: ManualClock,
    pub alarms: ManualAlarmService,
    pub notifications: RecordingNotificationService,
    pub tabs: RecordingTabService,
    pub menus: RecordingMenuHost,
    pub stores: StoreManager,
    pub scheduler: ReminderScheduler,
    pub handler: NotificationLifecycleHandler,
    pub library: LibraryService,
}

impl TestApp {
    /// Create a test application over an in-memory store.
    pub fn new() -> Self {
        Self::with_stores(StoreManager::from_backend(Arc::new(
            MemoryKeyValueStore::new(),
        )))
    }

    /// Create a test application over a JSON file store at `path`.
    pub async fn with_file(path: &std::path::Path) -> Self {
        let config = StoreConfig {
            provider: "file".to_string(),
            path: path.display().to_string(),
        };
        let stores = StoreManager::new(&config)
            .await
            .expect("Failed to open file store");
        Self::with_stores(stores)
    }

    fn with_stores(stores: StoreManager) -> Self {
        let clock = ManualClock::new(T0);
        let alarms = ManualAlarmService::new();
        let notifications = RecordingNotificationService::new();
        let tabs = RecordingTabService::new();
        let menus = RecordingMenuHost::new();

        let scheduler = ReminderScheduler::new(
            Arc::new(alarms.clone()),
            stores.items(),
            stores.settings(),
            Arc::new(clock.clone()),
            ReminderConfig::default(),
        );
        let handler = NotificationLifecycleHandler::new(
            scheduler.clone(),
            Arc::new(notifications.clone()),
            Arc::new(tabs.clone()),
            Arc::new(menus.clone()),
        );
        let library = LibraryService::new(scheduler.clone(), stores.settings())
            .with_notifications(Arc::new(notifications.clone()));

        Self {
            clock,
            alarms,
            notifications,
            tabs,
            menus,
            stores,
            scheduler,
            handler,
            library,
        }
    }

    /// Current test time.
    pub fn now(&self) -> i64 {
        self.scheduler.now()
    }

    /// Jump to `at` and handle every alarm due by then. Returns how many
    /// alarms fired.
    pub async fn run_until(&self, at: i64) -> usize {
        self.clock.set(at);
        let due = self.alarms.take_due(at);
        let fired = due.len();
        for event in due {
            self.handler.handle(event).await;
        }
        fired
    }

    /// Deliver one host event.
    pub async fn send(&self, event: HostEvent) {
        self.handler.handle(event).await;
    }

    /// Scheduled time of the live alarm `name`.
    pub async fn alarm_time(&self, name: &str) -> Option<i64> {
        use reado_core::traits::alarm::AlarmService;
        self.alarms
            .get(name)
            .await
            .expect("Alarm lookup failed")
            .map(|a| a.scheduled_time)
    }

    /// The stored record for `url`, which must exist.
    pub async fn item(&self, url: &str) -> SavedItem {
        self.stores
            .items()
            .get(url)
            .await
            .expect("Store read failed")
            .expect("Item should exist")
    }
}

/// Click the notification body for `url`.
pub fn clicked(url: &str) -> HostEvent {
    HostEvent::NotificationClicked {
        notification_id: url.to_string(),
    }
}

/// Press button `index` on the notification for `url`.
pub fn button(url: &str, index: u32) -> HostEvent {
    HostEvent::NotificationButtonClicked {
        notification_id: url.to_string(),
        button_index: index,
    }
}

/// A page finished loading at `url`.
pub fn page_loaded(url: &str) -> HostEvent {
    HostEvent::PageLoaded {
        url: url.to_string(),
    }
}
