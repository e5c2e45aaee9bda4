//! Host process wiring.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncWrite};
use tokio::sync::{mpsc, watch};
use tracing::{error, info, warn};

use reado_core::config::ReminderConfig;
use reado_core::error::AppError;
use reado_core::result::AppResult;
use reado_core::traits::clock::Clock;
use reado_host::TimerAlarmService;
use reado_host::bridge::{BridgeHost, read_events, write_commands};
use reado_reminder::{EventDispatcher, NotificationLifecycleHandler, ReminderScheduler};
use reado_store::StoreManager;

/// Capacity of the host event channel shared by the bridge reader and the
/// alarm timers.
pub const EVENT_CAPACITY: usize = 256;

/// Run the host until `reader` reaches EOF or `shutdown` is set.
///
/// Pending reminders are re-armed from the store first. Events already
/// queued when the input ends are still handled, and every command they
/// produce is written before this returns. Returns the number of events
/// handled.
pub async fn run_bridge<R, W>(
    reminder: ReminderConfig,
    stores: &StoreManager,
    clock: Arc<dyn Clock>,
    reader: R,
    writer: W,
    mut shutdown: watch::Receiver<bool>,
) -> AppResult<u64>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (event_tx, event_rx) = mpsc::channel(EVENT_CAPACITY);
    let alarms = TimerAlarmService::new(event_tx.clone(), Arc::clone(&clock));
    let (bridge, commands) = BridgeHost::new();
    let bridge = Arc::new(bridge);

    let scheduler = ReminderScheduler::new(
        Arc::new(alarms.clone()),
        stores.items(),
        stores.settings(),
        clock,
        reminder,
    );
    if let Err(e) = scheduler.restore_alarms().await {
        warn!(error = %e, "Failed to restore reminder alarms");
    }

    let handler = Arc::new(NotificationLifecycleHandler::new(
        scheduler,
        bridge.clone(),
        bridge.clone(),
        bridge.clone(),
    ));
    drop(bridge);

    let writer_handle = tokio::spawn(write_commands(commands, writer));

    let (cancel_tx, cancel_rx) = watch::channel(false);
    let dispatcher = EventDispatcher::new(handler);
    let dispatch_handle = tokio::spawn(async move { dispatcher.run(event_rx, cancel_rx).await });

    // A dropped shutdown sender means no signal will ever come.
    let stop = async {
        while shutdown.changed().await.is_ok() {
            if *shutdown.borrow() {
                return;
            }
        }
        std::future::pending::<()>().await
    };

    tokio::select! {
        result = read_events(reader, event_tx) => {
            if let Err(e) = result {
                error!(error = %e, "Bridge input failed");
            }
        }
        _ = stop => {
            info!("Shutdown requested");
        }
    }

    let _ = cancel_tx.send(true);
    let handled = dispatch_handle
        .await
        .map_err(|e| AppError::internal(format!("Event dispatcher panicked: {e}")))?;
    alarms.shutdown();
    drop(alarms);

    match writer_handle.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!(error = %e, "Bridge output failed"),
        Err(e) => error!(error = %e, "Bridge writer panicked"),
    }

    info!(handled, "Host bridge stopped");
    Ok(handled)
}
