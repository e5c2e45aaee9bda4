//! Commands acting on one saved page.

use clap::Args;

use reado_core::result::AppResult;
use reado_service::LibraryService;

use super::list::ItemRow;
use crate::output::{self, OutputFormat};

/// A page URL argument
#[derive(Debug, Args)]
pub struct UrlArgs {
    /// Page URL
    pub url: String,
}

/// Arguments for the tags command
#[derive(Debug, Args)]
pub struct TagsArgs {
    /// Page URL
    pub url: String,
    /// New tags, separated by commas; empty clears them
    #[arg(default_value = "")]
    pub tags: String,
}

/// Show one saved page
pub async fn show(args: &UrlArgs, library: &LibraryService, format: OutputFormat) -> AppResult<()> {
    let entry = library.entry(&args.url).await?;
    output::print_item(&ItemRow::from(&entry), format);
    Ok(())
}

/// Mark a saved page as read
pub async fn mark_read(args: &UrlArgs, library: &LibraryService) -> AppResult<()> {
    library.mark_read(&args.url).await?;
    output::print_success(&format!("Marked '{}' as read", args.url));
    Ok(())
}

/// Delete a saved page
pub async fn delete(args: &UrlArgs, library: &LibraryService) -> AppResult<()> {
    if library.delete(&args.url).await? {
        output::print_success(&format!("Deleted '{}'", args.url));
    } else {
        output::print_warning(&format!("Nothing saved for '{}'", args.url));
    }
    Ok(())
}

/// Replace the tags of a saved page
pub async fn set_tags(args: &TagsArgs, library: &LibraryService) -> AppResult<()> {
    let item = library.set_tags(&args.url, &args.tags).await?;
    output::print_success(&format!("Tags: [{}]", item.tags.join(", ")));
    Ok(())
}
