//! In-process notification, tab and menu services that record what they
//! were asked to do.

pub mod recording;

pub use recording::{RecordingMenuHost, RecordingNotificationService, RecordingTabService};
