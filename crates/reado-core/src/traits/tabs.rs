//! Tab / page navigation trait.

use async_trait::async_trait;

use crate::result::AppResult;

/// Opens pages on the host.
#[async_trait]
pub trait TabService: Send + Sync + std::fmt::Debug + 'static {
    /// Open `url` in a new tab.
    async fn open(&self, url: &str) -> AppResult<()>;
}
