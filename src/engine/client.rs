//! HTTP client for the upstream engine.

use reqwest::header::HeaderValue;
use reqwest::Client;
use url::Url;

use crate::engine::types::{Calculation, EngineError, EngineResponse, EngineResult};
use crate::http::X_REQUEST_ID;

/// Client for the engine's calculation endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct EngineClient {
    inner: Client,
    endpoint: Url,
}

impl EngineClient {
    /// Create a client for the given calculation endpoint.
    ///
    /// No request timeout is set: a stalled engine stalls the caller.
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        // The engine is addressed directly on the internal network.
        let inner = Client::builder().no_proxy().build()?;
        Ok(Self { inner, endpoint })
    }

    /// Build the upstream URL for a calculation.
    ///
    /// Values are passed through verbatim apart from standard query encoding.
    pub fn calculation_url(&self, calculation: &Calculation) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("date", &calculation.date)
            .append_pair("time", &calculation.time);
        url
    }

    /// Ask the engine for one calculation.
    ///
    /// The response status is not inspected; any body that decodes into
    /// [`EngineResponse`] is accepted.
    pub async fn calculate(
        &self,
        calculation: &Calculation,
        request_id: Option<&HeaderValue>,
    ) -> EngineResult<EngineResponse> {
        let url = self.calculation_url(calculation);
        tracing::debug!(url = %url, "Calling engine");

        let mut request = self.inner.get(url);
        if let Some(id) = request_id {
            request = request.header(X_REQUEST_ID, id.clone());
        }

        let response = request.send().await.map_err(EngineError::Unreachable)?;
        let status = response.status();

        // Reading the whole body hands the connection back to the pool.
        let body = response
            .bytes()
            .await
            .map_err(|e| EngineError::Malformed(Box::new(e)))?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::debug!(status = %status, body_len = body.len(), "Engine body did not decode");
            EngineError::Malformed(Box::new(e))
        })
    }
}
