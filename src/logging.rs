//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt};

use reado_core::config::LoggingConfig;

/// Initialize tracing. `RUST_LOG` overrides the configured level. Output
/// goes to stderr; stdout belongs to the bridge protocol.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
