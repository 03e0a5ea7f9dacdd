//! Fake Slack Web API
//!
//! Serves `files.list` and `files.delete` from memory and records every
//! call so tests can assert on what the sweeper sent upstream.

use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// One recorded `files.delete` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCall {
    pub file: String,
    pub authorization: Option<String>,
}

#[derive(Default)]
struct FakeState {
    files: Vec<Value>,
    total: Option<u32>,
    list_error: Option<String>,
    list_status: Option<StatusCode>,
    failing_deletes: HashSet<String>,
    delete_statuses: HashMap<String, StatusCode>,
    list_queries: Vec<HashMap<String, String>>,
    delete_calls: Vec<DeleteCall>,
}

type Shared = Arc<Mutex<FakeState>>;

/// Running fake Slack server
pub struct FakeSlack {
    addr: SocketAddr,
    state: Shared,
    _handle: JoinHandle<()>,
}

impl FakeSlack {
    /// Start the fake on an ephemeral port
    pub async fn start() -> Result<Self> {
        let state = Shared::default();
        let app = Router::new()
            .route("/api/files.list", get(files_list))
            .route("/api/files.delete", post(files_delete))
            .with_state(state.clone());

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            state,
            _handle: handle,
        })
    }

    /// Base URL to use as `SLACK_API_BASE_URL`
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    fn state(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    /// Serve these files from `files.list`
    pub fn set_files(&self, files: Vec<Value>) {
        self.state().files = files;
    }

    /// Report a `paging.total` larger than the page
    pub fn set_total(&self, total: u32) {
        self.state().total = Some(total);
    }

    /// Answer `files.list` with `ok: false`
    pub fn fail_list(&self, error: &str) {
        self.state().list_error = Some(error.to_string());
    }

    /// Answer `files.list` with an HTTP error status
    pub fn fail_list_status(&self, status: StatusCode) {
        self.state().list_status = Some(status);
    }

    /// Answer `files.delete` for this file with `ok: false`
    pub fn fail_delete(&self, file_id: &str) {
        self.state().failing_deletes.insert(file_id.to_string());
    }

    /// Answer `files.delete` for this file with an HTTP error status
    pub fn fail_delete_status(&self, file_id: &str, status: StatusCode) {
        self.state()
            .delete_statuses
            .insert(file_id.to_string(), status);
    }

    pub fn list_queries(&self) -> Vec<HashMap<String, String>> {
        self.state().list_queries.clone()
    }

    pub fn delete_calls(&self) -> Vec<DeleteCall> {
        self.state().delete_calls.clone()
    }

    pub fn deleted_ids(&self) -> Vec<String> {
        self.delete_calls().into_iter().map(|c| c.file).collect()
    }
}

async fn files_list(
    State(state): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let mut state = state.lock().unwrap();
    state.list_queries.push(query);

    if let Some(status) = state.list_status {
        return status.into_response();
    }
    if let Some(error) = &state.list_error {
        return Json(json!({ "ok": false, "error": error })).into_response();
    }

    let count = state.files.len();
    Json(json!({
        "ok": true,
        "files": state.files,
        "paging": {
            "count": 100,
            "total": state.total.unwrap_or(count as u32),
            "page": 1,
            "pages": 1,
        },
    }))
    .into_response()
}

#[derive(Deserialize)]
struct DeleteBody {
    file: String,
}

async fn files_delete(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<DeleteBody>,
) -> Response {
    let mut state = state.lock().unwrap();
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let failed = state.failing_deletes.contains(&body.file);
    let status = state.delete_statuses.get(&body.file).copied();
    state.delete_calls.push(DeleteCall {
        file: body.file,
        authorization,
    });

    if let Some(status) = status {
        return status.into_response();
    }
    if failed {
        Json(json!({ "ok": false, "error": "cant_delete_file" })).into_response()
    } else {
        Json(json!({ "ok": true })).into_response()
    }
}
