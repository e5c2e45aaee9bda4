//! Newline-delimited JSON bridge to the browser side.
//!
//! The browser half (a native-messaging shim) writes [`HostEvent`] lines to
//! our stdin and executes the [`HostCommand`] lines we write to stdout.
//! Alarms stay on this side of the bridge and are driven by
//! [`TimerAlarmService`](crate::alarm::TimerAlarmService).
//!
//! [`HostEvent`]: reado_core::events::HostEvent

pub mod contract;
pub mod host;
pub mod stdio;

pub use contract::HostCommand;
pub use host::BridgeHost;
pub use stdio::{read_events, write_commands};
