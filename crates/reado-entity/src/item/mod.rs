//! Saved item entity and tag helpers.

pub mod model;
pub mod tags;

pub use model::SavedItem;
pub use tags::{matches_any_tag, parse_tags};
