//! # reado-core
//!
//! Core crate for Reado. Contains the collaborator traits (key-value store,
//! alarms, notifications, tabs, clock), configuration schemas, typed alarm
//! names, host events, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Reado crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
