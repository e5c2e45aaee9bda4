//! JSON-file key-value backend.

pub mod store;

pub use store::FileKeyValueStore;
