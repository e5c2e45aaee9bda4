//! Key-value store persisted as a single JSON document.
//!
//! The document is a JSON object mapping keys to values. Every operation
//! reads the document from disk, so a CLI invocation and a running host
//! process sharing one file always see each other's writes. Writes go to a
//! sibling temp file that is then renamed over the document.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::debug;

use reado_core::error::{AppError, ErrorKind};
use reado_core::result::AppResult;
use reado_core::traits::store::KeyValueStore;

type Document = BTreeMap<String, Value>;

/// JSON-file key-value store.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    /// Location of the JSON document.
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    lock: Arc<Mutex<()>>,
}

impl FileKeyValueStore {
    /// Open a store at `path`, creating parent directories. The document
    /// itself is created on first write.
    pub async fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Store,
                    format!("Failed to create store directory '{}'", parent.display()),
                    e,
                )
            })?;
        }

        debug!(path = %path.display(), "Opened file store");
        Ok(Self {
            path,
            lock: Arc::new(Mutex::new(())),
        })
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> AppResult<Document> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Document::new()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                AppError::store(format!(
                    "Store document '{}' is not a JSON object: {e}",
                    self.path.display()
                ))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Document::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&self, doc: &Document) -> AppResult<()> {
        let json = serde_json::to_vec_pretty(doc)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> AppResult<Option<Value>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.remove(key))
    }

    async fn get_all(&self) -> AppResult<Vec<(String, Value)>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.into_iter().collect())
    }

    async fn set(&self, key: &str, value: Value) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut doc = self.load().await?;
        doc.insert(key.to_string(), value);
        self.persist(&doc).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut doc = self.load().await?;
        if doc.remove(key).is_some() {
            self.persist(&doc).await?;
        }
        Ok(())
    }
}
