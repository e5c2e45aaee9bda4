//! Line-oriented reader and writer halves of the bridge.
//!
//! Both are generic over tokio I/O so the binary plugs in stdin/stdout
//! while tests use in-memory buffers. Stdout carries only protocol lines;
//! logs must go to stderr.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{info, warn};

use reado_core::events::HostEvent;
use reado_core::result::AppResult;

use super::contract::HostCommand;

/// Read [`HostEvent`] lines from `reader` into `events` until EOF or until
/// the receiving side goes away. Malformed lines are logged and skipped.
pub async fn read_events<R>(reader: R, events: mpsc::Sender<HostEvent>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let event: HostEvent = match serde_json::from_str(trimmed) {
            Ok(event) => event,
            Err(e) => {
                warn!(error = %e, raw_line = %trimmed, "Failed to parse host event");
                continue;
            }
        };

        if events.send(event).await.is_err() {
            info!("Event receiver closed; stopping bridge reader");
            return Ok(());
        }
    }

    info!("Bridge input closed (EOF)");
    Ok(())
}

/// Write every queued [`HostCommand`] to `writer` as one JSON line, flushing
/// after each, until all senders are dropped.
pub async fn write_commands<W>(
    mut commands: mpsc::UnboundedReceiver<HostCommand>,
    mut writer: W,
) -> AppResult<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(command) = commands.recv().await {
        let mut json = serde_json::to_vec(&command)?;
        json.push(b'\n');
        writer.write_all(&json).await?;
        writer.flush().await?;
    }
    Ok(())
}
