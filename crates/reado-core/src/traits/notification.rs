//! Notification service trait.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::notification::NotificationOptions;

/// Platform notification service.
///
/// Notifications are addressed by id; the reminder flow reuses the saved
/// item's URL as the id. Creating with an id that is already shown
/// replaces it.
#[async_trait]
pub trait NotificationService: Send + Sync + std::fmt::Debug + 'static {
    /// Show a notification and return the id it was created under.
    async fn create(&self, id: &str, options: &NotificationOptions) -> AppResult<String>;

    /// Clear a notification. Returns `true` if one was open.
    async fn clear(&self, id: &str) -> AppResult<bool>;
}
