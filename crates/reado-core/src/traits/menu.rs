//! Context-menu host trait.

use async_trait::async_trait;

use crate::result::AppResult;

/// Host that owns page context-menu entries.
#[async_trait]
pub trait ContextMenuHost: Send + Sync + std::fmt::Debug + 'static {
    /// Register a menu entry shown on pages.
    async fn create(&self, id: &str, title: &str) -> AppResult<()>;
}
