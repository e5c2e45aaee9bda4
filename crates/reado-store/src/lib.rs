//! # reado-store
//!
//! Persistence for Reado. Two key-value backends implement
//! [`KeyValueStore`](reado_core::traits::KeyValueStore):
//!
//! - **memory**: in-process map using [dashmap](https://crates.io/crates/dashmap)
//! - **file**: one JSON document on disk, rewritten on every change
//!
//! On top of whichever backend is configured sit two typed views,
//! [`ItemStore`] and [`SettingsStore`], which share the backend but never
//! share keys.

#[cfg(feature = "file")]
pub mod file;
pub mod item_store;
pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
pub mod settings_store;

pub use item_store::ItemStore;
pub use provider::StoreManager;
pub use settings_store::SettingsStore;
