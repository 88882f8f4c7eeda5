//! Fake dev.to article API for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves `GET /articles?page=N&per_page=M` from an in-memory
//! record list, paging it the way dev.to does. Tests can also force a status
//! code, replace the body, or stop advertising the total count.
//!
//! # Example
//!
//! ```rust,no_run
//! let api = FakeDevToApi::start().await.unwrap();
//! api.set_records(devto_records(1, 30)).await;
//! let client = DevToClient::new(api.base_url(), "test").unwrap();
//! ```

use axum::{
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// One request as the server saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeenRequest {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ArticlesParams {
    page: Option<u32>,
    per_page: Option<u32>,
}

/// State shared between the router and test code.
struct ApiState {
    records: Vec<Value>,
    advertise_total: bool,
    /// Respond with this status and an empty body instead of records.
    forced_status: Option<StatusCode>,
    /// Respond 200 with this body instead of the paged records.
    body_override: Option<Value>,
    seen: Vec<SeenRequest>,
}

impl Default for ApiState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            advertise_total: true,
            forced_status: None,
            body_override: None,
            seen: Vec::new(),
        }
    }
}

/// Handle to the running fake API server.
pub struct FakeDevToApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeDevToApi {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState::default()));

        let app = Router::new()
            .route("/articles", get(list_articles))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Base URL for the API (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn set_records(&self, records: Vec<Value>) {
        self.state.lock().await.records = records;
    }

    /// Stop sending `X-Total-Count`.
    pub async fn hide_total(&self) {
        self.state.lock().await.advertise_total = false;
    }

    pub async fn fail_with(&self, status: u16) {
        self.state.lock().await.forced_status =
            Some(StatusCode::from_u16(status).expect("valid status code"));
    }

    pub async fn respond_with_body(&self, body: Value) {
        self.state.lock().await.body_override = Some(body);
    }

    /// Every request received so far, in arrival order.
    pub async fn requests(&self) -> Vec<SeenRequest> {
        self.state.lock().await.seen.clone()
    }
}

/// Handler: `GET /articles`
async fn list_articles(
    State(state): State<Arc<Mutex<ApiState>>>,
    Query(params): Query<ArticlesParams>,
) -> Response {
    let mut state = state.lock().await;
    state.seen.push(SeenRequest { page: params.page, per_page: params.per_page });

    if let Some(status) = state.forced_status {
        return status.into_response();
    }
    if let Some(body) = state.body_override.clone() {
        return Json(body).into_response();
    }

    // dev.to defaults: page 1, 30 per page.
    let page = params.page.unwrap_or(1).max(1) as usize;
    let per_page = params.per_page.unwrap_or(30).max(1) as usize;
    let slice: Vec<Value> = state
        .records
        .iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .cloned()
        .collect();

    let mut headers = HeaderMap::new();
    if state.advertise_total {
        if let Ok(v) = HeaderValue::from_str(&state.records.len().to_string()) {
            headers.insert("x-total-count", v);
        }
    }
    (headers, Json(Value::Array(slice))).into_response()
}
