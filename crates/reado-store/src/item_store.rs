//! Typed access to saved items.

use std::sync::Arc;

use tracing::warn;

use reado_core::result::AppResult;
use reado_core::traits::store::KeyValueStore;
use reado_entity::SavedItem;

use crate::keys;

/// Saved items keyed by URL, over a shared key-value backend.
///
/// Nothing is cached: every call goes to the backend, so each event
/// handler sees the latest record.
#[derive(Debug, Clone)]
pub struct ItemStore {
    backend: Arc<dyn KeyValueStore>,
}

impl ItemStore {
    /// Create an item store over `backend`.
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Load the item saved for `url`.
    pub async fn get(&self, url: &str) -> AppResult<Option<SavedItem>> {
        match self.backend.get(&keys::item(url)).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Write an item under its URL, replacing any previous record.
    pub async fn put(&self, item: &SavedItem) -> AppResult<()> {
        let value = serde_json::to_value(item)?;
        self.backend.set(&keys::item(&item.url), value).await
    }

    /// Delete the item saved for `url`. Missing items are not an error.
    pub async fn remove(&self, url: &str) -> AppResult<()> {
        self.backend.remove(&keys::item(url)).await
    }

    /// Every stored item. Records that no longer deserialize are skipped
    /// with a warning.
    pub async fn list(&self) -> AppResult<Vec<SavedItem>> {
        let mut items = Vec::new();
        for (key, value) in self.backend.get_all().await? {
            let Some(url) = keys::item_url(&key) else {
                continue;
            };
            match serde_json::from_value::<SavedItem>(value) {
                Ok(item) => items.push(item),
                Err(e) => warn!(url, error = %e, "Skipping unreadable saved item"),
            }
        }
        Ok(items)
    }
}
