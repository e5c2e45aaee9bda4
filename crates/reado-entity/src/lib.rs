//! # reado-entity
//!
//! Domain models for Reado. Every struct in this crate is a persisted
//! record (or part of one) and serializes to the camelCase JSON shape the
//! extension's storage area uses.

pub mod item;
pub mod settings;

pub use item::SavedItem;
pub use settings::Settings;
