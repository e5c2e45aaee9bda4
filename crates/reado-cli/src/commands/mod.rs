//! CLI command definitions and dispatch.

pub mod item;
pub mod list;
pub mod save;
pub mod settings;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use reado_core::config::AppConfig;
use reado_core::result::AppResult;
use reado_host::{ManualAlarmService, SystemClock};
use reado_reminder::ReminderScheduler;
use reado_service::LibraryService;
use reado_store::StoreManager;

use crate::output::OutputFormat;

/// Reado: save pages, read them later
#[derive(Debug, Parser)]
#[command(name = "reado", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Save a page, optionally with a reminder and tags
    Save(save::SaveArgs),
    /// List saved pages
    List(list::ListArgs),
    /// Show one saved page
    Show(item::UrlArgs),
    /// Mark a saved page as read
    Read(item::UrlArgs),
    /// Delete a saved page
    Delete(item::UrlArgs),
    /// Replace the tags of a saved page
    Tags(item::TagsArgs),
    /// Reminder settings
    Settings(settings::SettingsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> AppResult<()> {
        let library = open_library(&self.config).await?;
        match &self.command {
            Commands::Save(args) => save::execute(args, &library, self.format).await,
            Commands::List(args) => list::execute(args, &library, self.format).await,
            Commands::Show(args) => item::show(args, &library, self.format).await,
            Commands::Read(args) => item::mark_read(args, &library).await,
            Commands::Delete(args) => item::delete(args, &library).await,
            Commands::Tags(args) => item::set_tags(args, &library).await,
            Commands::Settings(args) => settings::execute(args, &library, self.format).await,
        }
    }
}

/// Helper: load configuration, falling back to defaults when the file is
/// absent
pub fn load_config(config_path: &str) -> AppResult<AppConfig> {
    if std::path::Path::new(config_path).exists() {
        AppConfig::load_file(config_path)
    } else {
        tracing::debug!(path = config_path, "Config file not found; using defaults");
        AppConfig::load("default")
    }
}

/// Helper: build the library service over the configured store.
///
/// Reminder alarms are armed by the host process, which restores them from
/// the store on startup; here they only need a sink.
pub async fn open_library(config_path: &str) -> AppResult<LibraryService> {
    let config = load_config(config_path)?;
    let stores = StoreManager::new(&config.store).await?;
    let scheduler = ReminderScheduler::new(
        Arc::new(ManualAlarmService::new()),
        stores.items(),
        stores.settings(),
        Arc::new(SystemClock),
        config.reminder,
    );
    Ok(LibraryService::new(scheduler, stores.settings()))
}
