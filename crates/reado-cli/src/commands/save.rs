//! Save command.

use clap::{Args, ValueEnum};

use reado_core::error::AppError;
use reado_core::result::AppResult;
use reado_service::{LibraryService, ReminderPreset, SaveRequest};

use super::list::ItemRow;
use crate::output::{self, OutputFormat};

/// Reminder choices offered when saving
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RemindChoice {
    /// In one hour
    Later,
    /// This evening
    Tonight,
    /// Tomorrow morning
    Tomorrow,
    /// At the time given by --at
    Custom,
}

/// Arguments for the save command
#[derive(Debug, Args)]
pub struct SaveArgs {
    /// Page URL
    pub url: String,

    /// Page title
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Tags, separated by commas
    #[arg(long, default_value = "")]
    pub tags: String,

    /// When to be reminded
    #[arg(short, long, value_enum)]
    pub remind: Option<RemindChoice>,

    /// Local time for a custom reminder, YYYY-MM-DDTHH:MM
    #[arg(long)]
    pub at: Option<String>,
}

impl SaveArgs {
    fn preset(&self) -> AppResult<Option<ReminderPreset>> {
        Ok(match self.remind {
            None => None,
            Some(RemindChoice::Later) => Some(ReminderPreset::Later),
            Some(RemindChoice::Tonight) => Some(ReminderPreset::Tonight),
            Some(RemindChoice::Tomorrow) => Some(ReminderPreset::Tomorrow),
            Some(RemindChoice::Custom) => {
                let at = self
                    .at
                    .clone()
                    .ok_or_else(|| AppError::validation("--remind custom requires --at"))?;
                Some(ReminderPreset::Custom(at))
            }
        })
    }
}

/// Execute the save command
pub async fn execute(
    args: &SaveArgs,
    library: &LibraryService,
    format: OutputFormat,
) -> AppResult<()> {
    let reminder = args.preset()?;
    let wanted_reminder = reminder.is_some();
    let updating = library.is_saved(&args.url).await?;

    let item = library
        .save(SaveRequest {
            url: args.url.clone(),
            title: args.title.clone(),
            tags: args.tags.clone(),
            reminder,
        })
        .await?;

    if wanted_reminder && item.reminder.is_none() {
        output::print_warning("Reminder time not understood; saved without reminder");
    }
    output::print_success(if updating { "已更新" } else { "已保存!" });
    output::print_item(&ItemRow::from_item(&item, false), format);
    Ok(())
}
