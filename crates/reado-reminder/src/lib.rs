//! Reminder scheduling and notification lifecycle for Reado.
//!
//! This crate provides:
//! - The reminder scheduler, which owns the `reminder-<url>` and
//!   `dismiss-<url>` alarms and applies every reminder state transition
//!   through one entry point
//! - The notification lifecycle handler, which reacts to alarm fires,
//!   notification clicks and page visits
//! - An event dispatcher that feeds host events to the handler one at a time

pub mod dispatcher;
pub mod formatter;
pub mod handler;
pub mod outcome;
pub mod scheduler;

#[cfg(test)]
mod testing;

pub use dispatcher::EventDispatcher;
pub use formatter::NotificationFormatter;
pub use handler::NotificationLifecycleHandler;
pub use outcome::ReminderOutcome;
pub use scheduler::{AlarmFireHandler, ReminderScheduler};
