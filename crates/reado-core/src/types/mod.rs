//! Shared value types: alarm names, notification options, time units.

pub mod alarm;
pub mod notification;
pub mod time;

pub use alarm::{AlarmKind, AlarmName};
pub use notification::{NotificationAction, NotificationOptions};
pub use time::EpochMillis;
