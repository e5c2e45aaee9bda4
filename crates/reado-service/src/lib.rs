//! # reado-service
//!
//! Library operations behind the popup and dashboard: saving a page with a
//! reminder preset and tags, listing and filtering saved items, marking
//! read, deleting and editing settings. Every reminder change is routed
//! through the scheduler's outcome pipeline.

pub mod library;
pub mod listing;
pub mod preset;
pub mod timing;

#[cfg(test)]
mod testing;

pub use library::{LibraryService, SaveRequest};
pub use listing::{ListFilter, ListTab, ListedItem};
pub use preset::ReminderPreset;
pub use timing::{TimingDelta, TimingFacts, describe_timing, format_duration};
