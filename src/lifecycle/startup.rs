//! Startup orchestration.
//!
//! Metrics first, then the server, then the listener: traffic is only
//! accepted once everything behind it is ready.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::RelayConfig;
use crate::http::{HttpServer, ServerError};
use crate::lifecycle::signals::spawn_signal_listener;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

/// Fatal errors before or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to start metrics endpoint: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error(transparent)]
    Server(#[from] ServerError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Run the relay until a shutdown signal arrives.
///
/// `config` must already be validated.
pub async fn start(config: RelayConfig) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(e) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    error = %e,
                    "Failed to parse metrics address, metrics disabled"
                );
            }
        }
    }

    let bind_address = config.listener.bind_address.clone();
    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            addr: bind_address.clone(),
            source,
        })?;

    let port = listener
        .local_addr()
        .map(|a| a.port())
        .map_err(StartupError::Serve)?;
    tracing::info!("Backend starting on port {} ...", port);

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    spawn_signal_listener(shutdown);

    server
        .run(listener, server_shutdown)
        .await
        .map_err(StartupError::Serve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bind_failure_is_reported() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mut config = RelayConfig::default();
        config.listener.bind_address = taken.local_addr().unwrap().to_string();

        let err = start(config).await.unwrap_err();
        assert!(matches!(err, StartupError::Bind { .. }));
        assert!(err.to_string().starts_with("failed to bind 127.0.0.1:"));
    }

    #[tokio::test]
    async fn bad_metrics_address_does_not_abort_startup() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mut config = RelayConfig::default();
        config.listener.bind_address = taken.local_addr().unwrap().to_string();
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = "not-an-address".into();

        // Startup carries on past metrics and stops at the occupied port.
        let err = start(config).await.unwrap_err();
        assert!(matches!(err, StartupError::Bind { .. }));
    }
}
