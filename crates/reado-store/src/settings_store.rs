//! Typed access to the global settings record.

use std::sync::Arc;

use reado_core::result::AppResult;
use reado_core::traits::store::KeyValueStore;
use reado_entity::Settings;

use crate::keys;

/// The single settings record, over a shared key-value backend.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    backend: Arc<dyn KeyValueStore>,
}

impl SettingsStore {
    /// Create a settings store over `backend`.
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Load settings, or defaults when none were ever written.
    pub async fn get(&self) -> AppResult<Settings> {
        match self.backend.get(keys::SETTINGS).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Settings::default()),
        }
    }

    /// Replace the settings record.
    pub async fn put(&self, settings: &Settings) -> AppResult<()> {
        let value = serde_json::to_value(settings)?;
        self.backend.set(keys::SETTINGS, value).await
    }
}
