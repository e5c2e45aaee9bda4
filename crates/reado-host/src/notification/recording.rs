//! Recording platform services.
//!
//! These keep the visible state (open notifications, opened tabs, menu
//! entries) in memory and log every call, which is all a headless host
//! needs and what scenario tests assert against.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::info;

use reado_core::error::AppError;
use reado_core::result::AppResult;
use reado_core::traits::menu::ContextMenuHost;
use reado_core::traits::notification::NotificationService;
use reado_core::traits::tabs::TabService;
use reado_core::types::notification::NotificationOptions;

/// Notification service holding the currently open notifications.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotificationService {
    /// Id → options of open notifications.
    open: Arc<DashMap<String, NotificationOptions>>,
    /// Every id ever shown, in order.
    shown: Arc<Mutex<Vec<String>>>,
    /// When set, `create` fails as a platform error.
    fail_creates: Arc<AtomicBool>,
}

impl RecordingNotificationService {
    /// Create a service with nothing shown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `create` calls fail (or succeed again).
    pub fn set_fail_creates(&self, fail: bool) {
        self.fail_creates.store(fail, Ordering::SeqCst);
    }

    /// Options of the open notification `id`.
    pub fn open_notification(&self, id: &str) -> Option<NotificationOptions> {
        self.open.get(id).map(|e| e.value().clone())
    }

    /// Number of open notifications.
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Ids of every notification shown so far, in order.
    pub async fn shown(&self) -> Vec<String> {
        self.shown.lock().await.clone()
    }
}

#[async_trait]
impl NotificationService for RecordingNotificationService {
    async fn create(&self, id: &str, options: &NotificationOptions) -> AppResult<String> {
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(AppError::platform(format!("Notification '{id}' rejected")));
        }
        info!(id, title = %options.title, message = %options.message, "Notification shown");
        self.open.insert(id.to_string(), options.clone());
        self.shown.lock().await.push(id.to_string());
        Ok(id.to_string())
    }

    async fn clear(&self, id: &str) -> AppResult<bool> {
        Ok(self.open.remove(id).is_some())
    }
}

/// Tab service recording opened URLs.
#[derive(Debug, Clone, Default)]
pub struct RecordingTabService {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingTabService {
    /// Create a service with no tabs opened.
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs opened so far, in order.
    pub async fn opened(&self) -> Vec<String> {
        self.opened.lock().await.clone()
    }
}

#[async_trait]
impl TabService for RecordingTabService {
    async fn open(&self, url: &str) -> AppResult<()> {
        info!(url, "Opening tab");
        self.opened.lock().await.push(url.to_string());
        Ok(())
    }
}

/// Menu host recording registered entries.
#[derive(Debug, Clone, Default)]
pub struct RecordingMenuHost {
    entries: Arc<DashMap<String, String>>,
}

impl RecordingMenuHost {
    /// Create a host with no entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Title of the entry `id`.
    pub fn entry(&self, id: &str) -> Option<String> {
        self.entries.get(id).map(|e| e.value().clone())
    }
}

#[async_trait]
impl ContextMenuHost for RecordingMenuHost {
    async fn create(&self, id: &str, title: &str) -> AppResult<()> {
        self.entries.insert(id.to_string(), title.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> NotificationOptions {
        NotificationOptions {
            title: "t".to_string(),
            message: "m".to_string(),
            icon_url: "i".to_string(),
            buttons: vec![],
            priority: 0,
        }
    }

    #[tokio::test]
    async fn test_create_and_clear() {
        let service = RecordingNotificationService::new();
        let id = service.create("https://a.test", &options()).await.unwrap();
        assert_eq!(id, "https://a.test");
        assert_eq!(service.open_count(), 1);
        assert!(service.clear("https://a.test").await.unwrap());
        assert!(!service.clear("https://a.test").await.unwrap());
        assert_eq!(service.shown().await, vec!["https://a.test"]);
    }

    #[tokio::test]
    async fn test_failing_create_shows_nothing() {
        let service = RecordingNotificationService::new();
        service.set_fail_creates(true);
        assert!(service.create("x", &options()).await.is_err());
        assert_eq!(service.open_count(), 0);
    }

    #[tokio::test]
    async fn test_tabs_and_menu() {
        let tabs = RecordingTabService::new();
        tabs.open("https://a.test").await.unwrap();
        assert_eq!(tabs.opened().await, vec!["https://a.test"]);

        let menu = RecordingMenuHost::new();
        menu.create("save-page", "保存到 Reado").await.unwrap();
        assert_eq!(menu.entry("save-page").as_deref(), Some("保存到 Reado"));
    }
}
