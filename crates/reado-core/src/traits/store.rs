//! Key-value store trait for pluggable persistence backends.

use async_trait::async_trait;
use serde_json::Value;

use crate::result::AppResult;

/// Asynchronous key-value store holding JSON values.
///
/// Mirrors the host's sync storage area: point reads, a read-all, writes
/// that replace the value under a key, and removal. Implementations must
/// treat removal of a missing key as success.
#[async_trait]
pub trait KeyValueStore: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist.
    async fn get(&self, key: &str) -> AppResult<Option<Value>>;

    /// Read every entry in the store.
    async fn get_all(&self) -> AppResult<Vec<(String, Value)>>;

    /// Write a value, replacing any previous value under the key.
    async fn set(&self, key: &str, value: Value) -> AppResult<()>;

    /// Remove a key.
    async fn remove(&self, key: &str) -> AppResult<()>;
}
