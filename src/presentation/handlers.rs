// HTTP request handlers
use crate::application::export::is_valid_kind;
use crate::domain::page::Page;
use crate::infrastructure::chunked_json::stream_from_receiver;
use crate::infrastructure::http_response::{accepts_brotli, download_response, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::shell;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct VisibilityRequest {
    pub visible: bool,
}

#[derive(Deserialize)]
pub struct ToggleQuery {
    pub mountpoint: String,
}

#[derive(Deserialize)]
pub struct StreamQuery {
    pub encoding: Option<String>,
}

fn respond(result: Result<Response, StatusCode>) -> Response {
    match result {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Page shell with the static credit
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(shell::render(&state.credit))
}

/// Switch to a page and return its freshly rendered fragment
pub async fn activate_page(
    Path(slug): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let page: Page = match slug.parse() {
        Ok(page) => page,
        Err(e) => {
            tracing::debug!("{}", e);
            return StatusCode::NOT_FOUND.into_response();
        }
    };

    match state.dashboard.activate(page).await {
        Ok(fragment) => respond(json_response(&fragment, accepts_brotli(&headers)).await),
        Err(e) => {
            tracing::warn!(%page, "Error rendering page: {:#}", e);
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

/// Latest published fragment
pub async fn latest_fragment(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    match state.dashboard.latest() {
        Some(fragment) => respond(json_response(&fragment, accepts_brotli(&headers)).await),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Current chart series
pub async fn charts(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let charts = state.dashboard.charts().await;
    respond(json_response(&charts, accepts_brotli(&headers)).await)
}

pub async fn set_visibility(
    State(state): State<Arc<AppState>>,
    Json(request): Json<VisibilityRequest>,
) -> StatusCode {
    if state.dashboard.set_visible(request.visible) {
        tracing::debug!("Dashboard visible again");
    }
    StatusCode::NO_CONTENT
}

/// Download one log stream as JSON
pub async fn export_logs(Path(kind): Path<String>, State(state): State<Arc<AppState>>) -> Response {
    if !is_valid_kind(&kind) {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match state.dashboard.export_logs(&kind).await {
        Ok(export) => respond(download_response(&export.filename, export.body)),
        Err(e) => {
            tracing::warn!(kind = %kind, "Error exporting logs: {:#}", e);
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

/// Open or close a storage partition panel
pub async fn toggle_storage(
    Query(query): Query<ToggleQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let fragment = state.dashboard.toggle_partition(&query.mountpoint).await;
    respond(json_response(&fragment, accepts_brotli(&headers)).await)
}

/// Server wall clock, 24h
pub async fn server_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Stream published fragments as NDJSON. Per-chunk Brotli is opt-in with
/// `?encoding=br`; `Accept-Encoding` is not consulted since the chunks carry
/// no `Content-Encoding`.
pub async fn stream_fragments(
    Query(query): Query<StreamQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let compress = query.encoding.as_deref() == Some("br");
    let (current, rx) = state.dashboard.subscribe();
    stream_from_receiver(current, rx, compress)
}
