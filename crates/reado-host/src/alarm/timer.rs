//! Alarm service backed by tokio timers.
//!
//! Each alarm is a spawned task sleeping until its fire time. On wake it
//! removes its own entry and sends [`HostEvent::AlarmFired`] into the
//! event channel. Replacing or clearing an alarm aborts the old task; a
//! generation id keeps a stale task from removing its replacement.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use reado_core::events::HostEvent;
use reado_core::result::AppResult;
use reado_core::traits::alarm::{Alarm, AlarmService};
use reado_core::traits::clock::Clock;
use reado_core::types::time::EpochMillis;

#[derive(Debug)]
struct Scheduled {
    alarm: Alarm,
    generation: u64,
    handle: JoinHandle<()>,
}

/// Timer-driven alarm service.
#[derive(Debug, Clone)]
pub struct TimerAlarmService {
    /// Name → pending timer.
    alarms: Arc<DashMap<String, Scheduled>>,
    /// Where fired alarms are delivered.
    events: mpsc::Sender<HostEvent>,
    /// Source of "now" for computing sleep durations.
    clock: Arc<dyn Clock>,
    /// Generation counter for scheduled timers.
    next_generation: Arc<AtomicU64>,
}

impl TimerAlarmService {
    /// Create a timer alarm service delivering into `events`.
    pub fn new(events: mpsc::Sender<HostEvent>, clock: Arc<dyn Clock>) -> Self {
        Self {
            alarms: Arc::new(DashMap::new()),
            events,
            clock,
            next_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.alarms.len()
    }

    /// Whether no timer is pending.
    pub fn is_empty(&self) -> bool {
        self.alarms.is_empty()
    }

    /// Abort every pending timer.
    pub fn shutdown(&self) {
        self.alarms.retain(|_, scheduled| {
            scheduled.handle.abort();
            false
        });
    }
}

#[async_trait]
impl AlarmService for TimerAlarmService {
    async fn create(&self, name: &str, when: EpochMillis) -> AppResult<()> {
        let delay = (when - self.clock.now_millis()).max(0) as u64;
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst);
        let alarm = Alarm {
            name: name.to_string(),
            scheduled_time: when,
        };

        let (armed_tx, armed_rx) = oneshot::channel::<()>();
        let alarms = Arc::clone(&self.alarms);
        let events = self.events.clone();
        let fired = alarm.clone();

        let handle = tokio::spawn(async move {
            // Wait until the entry for this generation is in the map.
            if armed_rx.await.is_err() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(delay)).await;

            let removed = alarms
                .remove_if(&fired.name, |_, s| s.generation == generation)
                .is_some();
            if !removed {
                return;
            }

            debug!(alarm = %fired.name, "Alarm fired");
            let event = HostEvent::AlarmFired {
                name: fired.name.clone(),
                scheduled_time: fired.scheduled_time,
            };
            if events.send(event).await.is_err() {
                warn!(alarm = %fired.name, "Event channel closed; dropping fired alarm");
            }
        });

        let previous = self.alarms.insert(
            name.to_string(),
            Scheduled {
                alarm,
                generation,
                handle,
            },
        );
        if let Some(previous) = previous {
            previous.handle.abort();
        }
        let _ = armed_tx.send(());

        debug!(alarm = name, when, delay_ms = delay, "Alarm scheduled");
        Ok(())
    }

    async fn clear(&self, name: &str) -> AppResult<bool> {
        match self.alarms.remove(name) {
            Some((_, scheduled)) => {
                scheduled.handle.abort();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn get(&self, name: &str) -> AppResult<Option<Alarm>> {
        Ok(self.alarms.get(name).map(|e| e.value().alarm.clone()))
    }
}
