//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::RawQuery,
    http::{HeaderMap, StatusCode},
    routing::get,
    Router,
};
use sanctuary_backend::config::RelayConfig;
use sanctuary_backend::http::HttpServer;
use sanctuary_backend::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// Reply of the reference engine for 2000-01-01 12:00.
#[allow(dead_code)]
pub const CANONICAL_REPLY: &str = r#"{"message":"ok","received_date":"2000-01-01","received_time":"12:00","year_pillar":"Geng-Chen","month_pillar":"Wu-Zi","day_pillar":"Jia-Yin","time_pillar":"Bing-Wu"}"#;

/// A mock engine that records every query it receives.
pub struct MockEngine {
    pub addr: SocketAddr,
    queries: Arc<Mutex<Vec<Vec<(String, String)>>>>,
    request_ids: Arc<Mutex<Vec<Option<String>>>>,
}

impl MockEngine {
    /// Decoded query pairs of each request, in arrival order.
    #[allow(dead_code)]
    pub fn queries(&self) -> Vec<Vec<(String, String)>> {
        self.queries.lock().unwrap().clone()
    }

    /// `x-request-id` header of each request, in arrival order.
    #[allow(dead_code)]
    pub fn request_ids(&self) -> Vec<Option<String>> {
        self.request_ids.lock().unwrap().clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Start a mock engine on an ephemeral port answering `/json` with a fixed
/// status and body.
pub async fn start_mock_engine(status: u16, body: &'static str) -> MockEngine {
    let queries: Arc<Mutex<Vec<Vec<(String, String)>>>> = Arc::new(Mutex::new(Vec::new()));
    let request_ids: Arc<Mutex<Vec<Option<String>>>> = Arc::new(Mutex::new(Vec::new()));
    let recorded = queries.clone();
    let recorded_ids = request_ids.clone();
    let status = StatusCode::from_u16(status).unwrap();

    let app = Router::new().route(
        "/json",
        get(move |headers: HeaderMap, RawQuery(raw): RawQuery| {
            let recorded = recorded.clone();
            let recorded_ids = recorded_ids.clone();
            async move {
                let id = headers
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                recorded_ids.lock().unwrap().push(id);
                let pairs: Vec<(String, String)> = url::form_urlencoded::parse(raw.unwrap_or_default().as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect();
                recorded.lock().unwrap().push(pairs);
                (status, body)
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockEngine {
        addr,
        queries,
        request_ids,
    }
}

/// An address with nothing listening on it.
#[allow(dead_code)]
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// A running relay pointed at `engine_url`.
pub struct RunningRelay {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl RunningRelay {
    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }
}

impl Drop for RunningRelay {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the relay on an ephemeral port.
pub async fn start_relay(engine_url: &str) -> RunningRelay {
    let mut config = RelayConfig::default();
    config.engine.base_url = engine_url.to_string();

    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    RunningRelay { addr, shutdown }
}

/// A client that never goes through a proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
