//! Engine wire types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One calculation as answered by the engine.
///
/// Lives for a single relay call: decoded from the upstream body, rendered,
/// then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EngineResponse {
    pub message: String,
    pub received_date: String,
    pub received_time: String,
    pub year_pillar: String,
    pub month_pillar: String,
    pub day_pillar: String,
    pub time_pillar: String,
}

/// The effective date/time pair sent upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calculation {
    pub date: String,
    pub time: String,
}

/// Errors that can occur while asking the engine for a calculation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine could not be reached or the exchange broke off.
    #[error("Error contacting engine: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// The body could not be read or does not have the expected shape.
    #[error("Failed to parse JSON")]
    Malformed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl EngineError {
    /// Short label used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::Unreachable(_) => "unreachable",
            EngineError::Malformed(_) => "malformed",
        }
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
