// Router construction
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard_page, not_found};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
