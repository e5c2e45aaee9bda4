//! Store manager that builds the configured backend and hands out the
//! typed stores over it.

use std::sync::Arc;

use tracing::info;

use reado_core::config::StoreConfig;
use reado_core::error::AppError;
use reado_core::result::AppResult;
use reado_core::traits::store::KeyValueStore;

use crate::item_store::ItemStore;
use crate::settings_store::SettingsStore;

/// Owns the key-value backend selected by configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The inner backend.
    inner: Arc<dyn KeyValueStore>,
}

impl StoreManager {
    /// Create a store manager from configuration.
    pub async fn new(config: &StoreConfig) -> AppResult<Self> {
        let inner: Arc<dyn KeyValueStore> = match config.provider.as_str() {
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory store");
                Arc::new(crate::memory::MemoryKeyValueStore::new())
            }
            #[cfg(feature = "file")]
            "file" => {
                info!(path = %config.path, "Initializing file store");
                Arc::new(crate::file::FileKeyValueStore::open(&config.path).await?)
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: memory, file"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a store manager from an existing backend (for testing).
    pub fn from_backend(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { inner: backend }
    }

    /// The raw backend.
    pub fn backend(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.inner)
    }

    /// Typed view over saved items.
    pub fn items(&self) -> ItemStore {
        ItemStore::new(self.backend())
    }

    /// Typed view over the settings record.
    pub fn settings(&self) -> SettingsStore {
        SettingsStore::new(self.backend())
    }
}
