//! Relay operation: query → engine → text.
//!
//! # Data Flow
//! ```text
//! RelayQuery (date?, time?)
//!     → query.rs (apply defaults)
//!     → engine client (one GET, decode)
//!     → render.rs (fixed text template)
//! ```

pub mod query;
pub mod render;

use std::time::Instant;

use axum::http::HeaderValue;

use crate::config::QueryDefaults;
use crate::engine::{EngineClient, EngineResult};
use crate::observability::metrics;

pub use query::RelayQuery;
pub use render::render_status;

/// Forwards date/time queries to the engine and renders the reply.
#[derive(Debug, Clone)]
pub struct Relay {
    engine: EngineClient,
    defaults: QueryDefaults,
}

impl Relay {
    pub fn new(engine: EngineClient, defaults: QueryDefaults) -> Self {
        Self { engine, defaults }
    }

    /// Run one relay call and return the rendered status block.
    pub async fn relay(
        &self,
        query: RelayQuery,
        request_id: Option<&HeaderValue>,
    ) -> EngineResult<String> {
        let start = Instant::now();
        let calculation = query.resolve(&self.defaults);

        tracing::debug!(
            date = %calculation.date,
            time = %calculation.time,
            "Relaying calculation"
        );

        match self.engine.calculate(&calculation, request_id).await {
            Ok(response) => {
                metrics::record_relay("ok", start);
                Ok(render_status(&response))
            }
            Err(e) => {
                metrics::record_relay(e.kind(), start);
                Err(e)
            }
        }
    }
}
