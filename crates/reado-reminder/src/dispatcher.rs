//! Event dispatcher: main loop feeding host events to the handler.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::info;

use reado_core::events::HostEvent;

use crate::handler::NotificationLifecycleHandler;

/// Pulls host events off a channel and handles them strictly one at a
/// time, so each event runs to completion before the next is read.
#[derive(Debug, Clone)]
pub struct EventDispatcher {
    handler: Arc<NotificationLifecycleHandler>,
}

impl EventDispatcher {
    /// Create a dispatcher for `handler`.
    pub fn new(handler: Arc<NotificationLifecycleHandler>) -> Self {
        Self { handler }
    }

    /// Run until the event channel closes or the cancel signal is set.
    /// Events already queued when the signal arrives are still handled.
    /// Returns the number of events handled.
    pub async fn run(
        &self,
        mut events: mpsc::Receiver<HostEvent>,
        mut cancel: watch::Receiver<bool>,
    ) -> u64 {
        info!("Event dispatcher started");
        let mut handled = 0u64;

        loop {
            tokio::select! {
                biased;
                changed = cancel.changed() => {
                    if changed.is_err() || *cancel.borrow() {
                        info!("Event dispatcher received shutdown signal");
                        while let Ok(event) = events.try_recv() {
                            self.handler.handle(event).await;
                            handled += 1;
                        }
                        break;
                    }
                }
                event = events.recv() => {
                    let Some(event) = event else {
                        info!("Event channel closed");
                        break;
                    };
                    self.handler.handle(event).await;
                    handled += 1;
                }
            }
        }

        info!(handled, "Event dispatcher stopped");
        handled
    }
}
