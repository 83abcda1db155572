//! Sanctuary backend.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client ──GET /json?date&time──▶ ┌──────────────┐ ──GET /json?date&time──▶ ┌────────┐
//!                                   │ http (axum)  │                          │ engine │
//!   Client ◀──── text/plain ─────── │  → relay     │ ◀──────── JSON ───────── │        │
//!                                   └──────────────┘                          └────────┘
//! ```

use clap::Parser;

use sanctuary_backend::cli::Cli;
use sanctuary_backend::lifecycle;
use sanctuary_backend::observability::logging::init_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("sanctuary-backend: {e}");
            std::process::exit(2);
        }
    };

    init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        engine = %config.engine.base_url,
        "Configuration loaded"
    );

    if let Err(e) = lifecycle::start(config).await {
        tracing::error!(error = %e, "Fatal error");
        std::process::exit(1);
    }

    tracing::info!("Shutdown complete");
}
