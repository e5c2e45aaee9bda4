//! # reado-host
//!
//! Concrete implementations of the platform collaborators declared in
//! `reado-core`:
//!
//! - **alarm**: a tokio timer service that delivers fired alarms into the
//!   event channel, and a manual service that fires only when told to
//! - **notification**: recording notification, tab and menu services
//! - **bridge**: newline-delimited JSON over stdio, for running behind a
//!   browser extension's native-messaging shim
//! - **clock**: system and manual clocks

pub mod alarm;
pub mod bridge;
pub mod clock;
pub mod notification;

pub use alarm::{ManualAlarmService, TimerAlarmService};
pub use bridge::BridgeHost;
pub use clock::{ManualClock, SystemClock};
pub use notification::{RecordingMenuHost, RecordingNotificationService, RecordingTabService};
