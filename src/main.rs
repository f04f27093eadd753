// Main entry point - Build the dashboard once, then serve it
mod application;
mod domain;
mod error;
mod infrastructure;
mod presentation;

use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_settings;
use crate::infrastructure::html::render_page;
use crate::infrastructure::http_response::RenderedPage;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = load_settings().context("failed to load dashboard configuration")?;

    // Initialize tracing
    let default_level = if settings.server.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "smartgrid_dashboard={level},tower_http={level}",
                    level = default_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let debug = settings.server.debug;
    if let Err(e) = run(settings).await {
        if debug {
            tracing::error!("Dashboard failed: {:?}", e);
        } else {
            tracing::error!("Dashboard failed: {:#}", e);
        }
        return Err(e);
    }

    Ok(())
}

async fn run(settings: infrastructure::config::Settings) -> anyhow::Result<()> {
    // Build the page (application layer)
    let service = DashboardService::new(settings.demand.seed);
    let page = service.build_page().context("failed to build dashboard page")?;

    // Render and encode once (infrastructure layer)
    let html = render_page(&page).context("failed to render dashboard page")?;
    let rendered = RenderedPage::encode(html)
        .await
        .context("failed to encode dashboard page")?;
    tracing::info!(
        figures = page.figures().count(),
        cards = page.cards().count(),
        html_bytes = rendered.html().len(),
        brotli_bytes = rendered.compressed_len(),
        etag = rendered.etag(),
        "Dashboard page rendered"
    );

    // Create application state
    let state = Arc::new(AppState {
        page: rendered,
        debug: settings.server.debug,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr = settings.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(
        debug = settings.server.debug,
        "Starting smartgrid-dashboard on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, router).await?;

    Ok(())
}
