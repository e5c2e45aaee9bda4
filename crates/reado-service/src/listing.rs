//! Dashboard listing: tab filter, tag search and ordering.

use serde::{Deserialize, Serialize};

use reado_core::types::time::EpochMillis;
use reado_entity::SavedItem;
use reado_entity::item::{matches_any_tag, parse_tags};

use crate::timing::{TimingFacts, describe_timing};

/// Which half of the library to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListTab {
    /// Items not read yet.
    #[default]
    Unread,
    /// Items already read.
    Read,
}

impl ListTab {
    fn admits(self, item: &SavedItem) -> bool {
        match self {
            Self::Unread => !item.read,
            Self::Read => item.read,
        }
    }
}

/// Listing criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Read or unread items.
    pub tab: ListTab,
    /// Tag search terms. Empty means no tag filtering.
    pub search: Vec<String>,
}

impl ListFilter {
    /// Filter for one tab with no tag search.
    pub fn new(tab: ListTab) -> Self {
        Self {
            tab,
            search: Vec::new(),
        }
    }

    /// Add a tag search from raw comma-separated input.
    pub fn with_search(mut self, raw: &str) -> Self {
        self.search = parse_tags(raw);
        self
    }

    /// Apply the filter to `items`, newest save first.
    pub fn apply(&self, items: Vec<SavedItem>, now: EpochMillis) -> Vec<ListedItem> {
        let mut listed: Vec<ListedItem> = items
            .into_iter()
            .filter(SavedItem::is_listable)
            .filter(|item| self.tab.admits(item))
            .filter(|item| self.search.is_empty() || matches_any_tag(&item.tags, &self.search))
            .map(|item| ListedItem::new(item, now))
            .collect();
        listed.sort_by(|a, b| b.item.saved_at.cmp(&a.item.saved_at));
        listed
    }
}

/// A saved item as shown in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedItem {
    /// The stored record.
    #[serde(flatten)]
    pub item: SavedItem,
    /// Reminder in the past on an unread item.
    pub overdue: bool,
    /// Reminder timing facts.
    pub timing: TimingFacts,
}

impl ListedItem {
    pub(crate) fn new(item: SavedItem, now: EpochMillis) -> Self {
        Self {
            overdue: item.is_overdue(now),
            timing: describe_timing(&item),
            item,
        }
    }
}
