//! List command and the row type shared by item output.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use reado_core::result::AppResult;
use reado_entity::SavedItem;
use reado_service::timing::{describe_timing, format_timestamp};
use reado_service::{LibraryService, ListFilter, ListTab, ListedItem};

use crate::output::{self, OutputFormat};

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show read pages instead of unread ones
    #[arg(long)]
    pub read: bool,

    /// Only pages with a tag containing any of these, comma separated
    #[arg(long)]
    pub tags: Option<String>,
}

/// Saved page display row
#[derive(Debug, Serialize, Tabled)]
pub struct ItemRow {
    /// Page URL
    pub url: String,
    /// Title
    pub title: String,
    /// Saved date
    pub saved: String,
    /// Tags
    pub tags: String,
    /// Overdue marker
    pub overdue: String,
    /// Reminder timing
    pub timing: String,
}

impl ItemRow {
    /// Build a row from a stored item.
    pub fn from_item(item: &SavedItem, overdue: bool) -> Self {
        Self {
            url: item.url.clone(),
            title: item.title.clone(),
            saved: format_timestamp(item.saved_at),
            tags: item.tags.join(", "),
            overdue: if overdue { "!".to_string() } else { String::new() },
            timing: describe_timing(item).to_string(),
        }
    }
}

impl From<&ListedItem> for ItemRow {
    fn from(listed: &ListedItem) -> Self {
        Self::from_item(&listed.item, listed.overdue)
    }
}

/// Execute the list command
pub async fn execute(
    args: &ListArgs,
    library: &LibraryService,
    format: OutputFormat,
) -> AppResult<()> {
    let tab = if args.read { ListTab::Read } else { ListTab::Unread };
    let mut filter = ListFilter::new(tab);
    if let Some(tags) = &args.tags {
        filter = filter.with_search(tags);
    }

    let listed = library.list(&filter).await?;
    if listed.is_empty() && !filter.search.is_empty() {
        output::print_warning(&format!(
            "未找到包含标签 \"{}\" 的内容。",
            filter.search.join(", ")
        ));
        return Ok(());
    }

    let rows: Vec<ItemRow> = listed.iter().map(ItemRow::from).collect();
    output::print_list(&rows, format);
    Ok(())
}
