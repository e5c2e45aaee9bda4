//! Alarm service implementations.

pub mod manual;
pub mod timer;

pub use manual::ManualAlarmService;
pub use timer::TimerAlarmService;
