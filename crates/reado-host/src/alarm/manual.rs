//! Alarm service that fires only when asked.
//!
//! Alarms are held in a map keyed by name; [`ManualAlarmService::take_due`]
//! removes every alarm whose time has come and returns the matching fire
//! events, in firing order. Deterministic, so scenario tests drive the
//! whole reminder flow through it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use reado_core::error::AppError;
use reado_core::events::HostEvent;
use reado_core::result::AppResult;
use reado_core::traits::alarm::{Alarm, AlarmService};
use reado_core::types::time::EpochMillis;

/// Manually driven alarm service. Clones share the same alarm set.
#[derive(Debug, Clone, Default)]
pub struct ManualAlarmService {
    /// Name → live alarm.
    alarms: Arc<DashMap<String, Alarm>>,
    /// When set, `create` fails as a platform error.
    fail_creates: Arc<AtomicBool>,
}

impl ManualAlarmService {
    /// Create an empty alarm service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `create` calls fail (or succeed again).
    pub fn set_fail_creates(&self, fail: bool) {
        self.fail_creates.store(fail, Ordering::SeqCst);
    }

    /// Names of all live alarms, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.alarms.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Number of live alarms.
    pub fn len(&self) -> usize {
        self.alarms.len()
    }

    /// Whether no alarm is live.
    pub fn is_empty(&self) -> bool {
        self.alarms.is_empty()
    }

    /// Remove every alarm due at `now` and return their fire events,
    /// earliest first.
    pub fn take_due(&self, now: EpochMillis) -> Vec<HostEvent> {
        let due: Vec<String> = self
            .alarms
            .iter()
            .filter(|e| e.value().scheduled_time <= now)
            .map(|e| e.key().clone())
            .collect();

        let mut fired: Vec<Alarm> = due
            .into_iter()
            .filter_map(|name| self.alarms.remove(&name).map(|(_, alarm)| alarm))
            .collect();
        fired.sort_by(|a, b| {
            a.scheduled_time
                .cmp(&b.scheduled_time)
                .then_with(|| a.name.cmp(&b.name))
        });

        fired
            .into_iter()
            .map(|alarm| HostEvent::AlarmFired {
                name: alarm.name,
                scheduled_time: alarm.scheduled_time,
            })
            .collect()
    }
}

#[async_trait]
impl AlarmService for ManualAlarmService {
    async fn create(&self, name: &str, when: EpochMillis) -> AppResult<()> {
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(AppError::platform(format!("Alarm '{name}' rejected")));
        }
        self.alarms.insert(
            name.to_string(),
            Alarm {
                name: name.to_string(),
                scheduled_time: when,
            },
        );
        Ok(())
    }

    async fn clear(&self, name: &str) -> AppResult<bool> {
        Ok(self.alarms.remove(name).is_some())
    }

    async fn get(&self, name: &str) -> AppResult<Option<Alarm>> {
        Ok(self.alarms.get(name).map(|e| e.value().clone()))
    }
}
