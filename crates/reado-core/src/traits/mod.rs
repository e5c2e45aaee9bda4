//! Collaborator traits defined in `reado-core` and implemented by the
//! store and host crates.

pub mod alarm;
pub mod clock;
pub mod menu;
pub mod notification;
pub mod store;
pub mod tabs;

pub use alarm::AlarmService;
pub use clock::Clock;
pub use menu::ContextMenuHost;
pub use notification::NotificationService;
pub use store::KeyValueStore;
pub use tabs::TabService;
