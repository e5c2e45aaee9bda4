//! Settings commands.

use clap::{Args, Subcommand};

use reado_core::result::AppResult;
use reado_service::LibraryService;

use crate::output::{self, OutputFormat};

/// Arguments for settings commands
#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// Settings subcommand
    #[command(subcommand)]
    pub command: SettingsCommand,
}

/// Settings subcommands
#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Show current settings
    Show,
    /// Set the minutes between repeat reminders
    SetInterval {
        /// Minutes, at least 1
        minutes: u32,
    },
}

/// Execute settings commands
pub async fn execute(
    args: &SettingsArgs,
    library: &LibraryService,
    format: OutputFormat,
) -> AppResult<()> {
    match &args.command {
        SettingsCommand::Show => {
            let minutes = library.repeat_interval().await?;
            match format {
                OutputFormat::Table => {
                    println!("Settings:");
                    output::print_kv("Repeat interval", &format!("{minutes} min"));
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::json!({ "repeatReminderInterval": minutes }));
                }
            }
        }
        SettingsCommand::SetInterval { minutes } => {
            library.set_repeat_interval(*minutes).await?;
            output::print_success(&format!("Repeat interval set to {minutes} min"));
        }
    }
    Ok(())
}
