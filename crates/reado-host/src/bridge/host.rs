//! Platform services that forward to the bridge.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashSet;
use tokio::sync::mpsc;

use reado_core::error::AppError;
use reado_core::result::AppResult;
use reado_core::traits::menu::ContextMenuHost;
use reado_core::traits::notification::NotificationService;
use reado_core::traits::tabs::TabService;
use reado_core::types::notification::NotificationOptions;

use super::contract::HostCommand;

/// Notification, tab and menu service that emits [`HostCommand`]s.
///
/// A call succeeds once the command is queued for the writer; a closed
/// writer is reported as a platform error.
#[derive(Debug, Clone)]
pub struct BridgeHost {
    commands: mpsc::UnboundedSender<HostCommand>,
    /// Ids of notifications shown and not yet cleared.
    open: Arc<DashSet<String>>,
}

impl BridgeHost {
    /// Create a bridge host and the receiver its commands arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<HostCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                commands: tx,
                open: Arc::new(DashSet::new()),
            },
            rx,
        )
    }

    fn send(&self, command: HostCommand) -> AppResult<()> {
        self.commands
            .send(command)
            .map_err(|_| AppError::platform("Bridge writer is closed"))
    }
}

#[async_trait]
impl NotificationService for BridgeHost {
    async fn create(&self, id: &str, options: &NotificationOptions) -> AppResult<String> {
        self.send(HostCommand::ShowNotification {
            id: id.to_string(),
            options: options.clone(),
        })?;
        self.open.insert(id.to_string());
        Ok(id.to_string())
    }

    async fn clear(&self, id: &str) -> AppResult<bool> {
        self.send(HostCommand::ClearNotification { id: id.to_string() })?;
        Ok(self.open.remove(id).is_some())
    }
}

#[async_trait]
impl TabService for BridgeHost {
    async fn open(&self, url: &str) -> AppResult<()> {
        self.send(HostCommand::OpenTab {
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl ContextMenuHost for BridgeHost {
    async fn create(&self, id: &str, title: &str) -> AppResult<()> {
        self.send(HostCommand::CreateContextMenu {
            id: id.to_string(),
            title: title.to_string(),
        })
    }
}
