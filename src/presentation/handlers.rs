// HTTP request handlers
use crate::presentation::app_state::AppState;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::IntoResponse,
};
use std::sync::Arc;

/// Serve the dashboard page
pub async fn dashboard_page(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    match state.page.response(&headers, state.debug) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Anything other than the dashboard root
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!("No route for {}", uri.path());
    (StatusCode::NOT_FOUND, "Not Found")
}
