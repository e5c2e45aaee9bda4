//! Shared fixture for unit tests.

use std::sync::Arc;

use reado_core::config::ReminderConfig;
use reado_host::{ManualAlarmService, ManualClock, RecordingNotificationService};
use reado_reminder::ReminderScheduler;
use reado_store::memory::MemoryKeyValueStore;
use reado_store::{ItemStore, SettingsStore};

use crate::library::LibraryService;

/// 2024-03-01T00:00:00Z.
pub const T0: i64 = 1_709_251_200_000;

pub struct Fixture {
    pub clock: ManualClock,
    pub alarms: ManualAlarmService,
    pub notifications: RecordingNotificationService,
    pub scheduler: ReminderScheduler,
    pub library: LibraryService,
}

impl Fixture {
    pub fn new() -> Self {
        let backend = Arc::new(MemoryKeyValueStore::new());
        let clock = ManualClock::new(T0);
        let alarms = ManualAlarmService::new();
        let notifications = RecordingNotificationService::new();
        let settings = SettingsStore::new(backend.clone());

        let scheduler = ReminderScheduler::new(
            Arc::new(alarms.clone()),
            ItemStore::new(backend),
            settings.clone(),
            Arc::new(clock.clone()),
            ReminderConfig::default(),
        );
        let library = LibraryService::new(scheduler.clone(), settings)
            .with_notifications(Arc::new(notifications.clone()));

        Self {
            clock,
            alarms,
            notifications,
            scheduler,
            library,
        }
    }
}
