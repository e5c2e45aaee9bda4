//! # reado
//!
//! The Reado host process. Wires the configured store, the reminder
//! scheduler and the notification lifecycle handler to a line-oriented
//! JSON bridge: host events come in on one stream, platform commands go
//! out on another.

pub mod app;
pub mod logging;

pub use app::{EVENT_CAPACITY, run_bridge};
