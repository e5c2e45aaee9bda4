//! Reado host: runs the reminder engine behind a stdio JSON bridge.
//!
//! Host events arrive on stdin as newline-delimited JSON; notification,
//! tab and menu commands leave on stdout. Logs go to stderr.

use std::sync::Arc;

use tokio::io::BufReader;
use tokio::sync::watch;

use reado::logging::init_logging;
use reado::run_bridge;
use reado_core::config::AppConfig;
use reado_core::error::AppError;
use reado_host::SystemClock;
use reado_store::StoreManager;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_configuration().map_err(|e| {
        eprintln!("Failed to load configuration: {e}");
        anyhow::anyhow!("configuration error: {e}")
    })?;

    init_logging(&config.logging);

    let handled = run(config).await.map_err(|e| {
        tracing::error!(error = %e, "reado-host exited with error");
        anyhow::anyhow!("reado-host failed: {e}")
    })?;

    tracing::info!(handled, "reado-host shut down cleanly");
    // The blocking stdin read would otherwise hold up runtime shutdown.
    std::process::exit(0)
}

/// Load configuration from `READO_CONFIG`, or from the `config/` directory
/// for the environment named by `READO_ENV`.
fn load_configuration() -> Result<AppConfig, AppError> {
    match std::env::var("READO_CONFIG") {
        Ok(path) => AppConfig::load_file(&path),
        Err(_) => {
            let env = std::env::var("READO_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
}

async fn run(config: AppConfig) -> Result<u64, AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        store = %config.store.provider,
        "Starting reado-host"
    );

    let stores = StoreManager::new(&config.store).await?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received Ctrl+C");
            let _ = shutdown_tx.send(true);
        }
    });

    run_bridge(
        config.reminder,
        &stores,
        Arc::new(SystemClock),
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        shutdown_rx,
    )
    .await
}
