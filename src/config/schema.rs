//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits for deserialization from config files.
//! Every section falls back to its defaults, so an empty file describes the
//! stock deployment: listen on port 8000, relay to `http://engine:8080/json`.

use serde::{Deserialize, Serialize};
use url::Url;

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream engine location.
    pub engine: EngineConfig,

    /// Values substituted for missing query parameters.
    pub defaults: QueryDefaults,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Upstream engine configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Scheme, host and port of the engine (e.g., "http://engine:8080").
    pub base_url: String,

    /// Calculation path on the engine.
    pub path: String,
}

impl EngineConfig {
    /// Full calculation endpoint, without query parameters.
    pub fn endpoint(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)?.join(&self.path)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: "http://engine:8080".to_string(),
            path: "/json".to_string(),
        }
    }
}

/// Fallback values for the relay query.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct QueryDefaults {
    pub date: String,
    pub time: String,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            date: "2000-01-01".to_string(),
            time: "12:00".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_deployment() {
        let config = RelayConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8000");
        assert_eq!(config.defaults.date, "2000-01-01");
        assert_eq!(config.defaults.time, "12:00");
        assert!(!config.observability.metrics_enabled);
        assert_eq!(
            config.engine.endpoint().unwrap().as_str(),
            "http://engine:8080/json"
        );
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: RelayConfig = toml::from_str(
            r#"
            [engine]
            base_url = "http://127.0.0.1:9999"
            "#,
        )
        .unwrap();

        assert_eq!(config.engine.path, "/json");
        assert_eq!(config.listener.bind_address, "0.0.0.0:8000");
        assert_eq!(
            config.engine.endpoint().unwrap().as_str(),
            "http://127.0.0.1:9999/json"
        );
    }
}
