//! Configuration validation.
//!
//! Serde handles the syntax; this module checks that the values make sense
//! before the config is accepted. Every problem is reported, not just the
//! first.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::RelayConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    BindAddress(String),

    #[error("engine endpoint is invalid: {0}")]
    EngineEndpoint(String),

    #[error("engine endpoint scheme `{0}` is not http or https")]
    EngineScheme(String),

    #[error("defaults.{0} must not be empty")]
    EmptyDefault(&'static str),

    #[error("observability.metrics_address `{0}` is not a socket address")]
    MetricsAddress(String),
}

/// Check a parsed config, collecting every error found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match config.engine.endpoint() {
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
            errors.push(ValidationError::EngineScheme(url.scheme().to_string()));
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::EngineEndpoint(e.to_string())),
    }

    if config.defaults.date.is_empty() {
        errors.push(ValidationError::EmptyDefault("date"));
    }
    if config.defaults.time.is_empty() {
        errors.push(ValidationError::EmptyDefault("time"));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
