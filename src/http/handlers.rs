//! Route handlers.

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use crate::engine::EngineError;
use crate::http::request::{request_id, request_id_str};
use crate::http::server::AppState;
use crate::relay::RelayQuery;

/// Body served on `/` and on any unknown path.
pub const USAGE: &str = "Sanctuary Backend.\nTry: /json?date=2000-01-01&time=12:00";

/// Static usage hint.
pub async fn usage() -> &'static str {
    USAGE
}

/// `/json`: relay the query to the engine and render the reply as text.
pub async fn relay_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let query = RelayQuery::from_pairs(pairs);

    match state.relay.relay(query, request_id(&headers)).await {
        Ok(text) => (StatusCode::OK, text).into_response(),
        Err(e) => {
            let request_id = request_id_str(&headers);
            match &e {
                EngineError::Unreachable(source) => {
                    tracing::error!(request_id = %request_id, error = %source, "Engine unreachable");
                }
                EngineError::Malformed(source) => {
                    tracing::warn!(request_id = %request_id, error = %source, "Engine reply did not decode");
                }
            }
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
