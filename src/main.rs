//! Sharebox server: multi-user file sharing with cookie sessions and
//! role-based route access.
//!
//! Main entry point that loads configuration, sets up logging, and starts
//! the server.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use sharebox_core::config::{AppConfig, LoggingConfig};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "sharebox-server", version, about = "Sharebox file sharing server")]
struct Cli {
    /// Directory holding `default.toml` and per-environment overlays.
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// Environment overlay to load, e.g. `development` or `production`.
    #[arg(long, default_value = "development")]
    env: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.config_dir, &cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);
    tracing::info!(
        config_dir = %cli.config_dir,
        env = %cli.env,
        "Starting Sharebox v{}",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = sharebox_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `logging.level` when set.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = fmt().with_env_filter(filter).with_target(true);

    match config.format.as_str() {
        "json" => builder.json().with_current_span(false).init(),
        "compact" => builder.compact().init(),
        _ => builder.pretty().init(),
    }
}
