// Presentation layer - HTTP routes and the page shell
pub mod app_state;
pub mod handlers;
pub mod shell;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    activate_page, charts, export_logs, health_check, index, latest_fragment, server_time,
    set_visibility, stream_fragments, toggle_storage,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Compression is applied per response and per stream chunk by the response
// builders, so there is no CompressionLayer here.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/pages/:page", get(activate_page))
        .route("/fragment", get(latest_fragment))
        .route("/charts", get(charts))
        .route("/visibility", post(set_visibility))
        .route("/logs/export/:kind", get(export_logs))
        .route("/storage/toggle", post(toggle_storage))
        .route("/time", get(server_time))
        .route("/stream", get(stream_fragments))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
