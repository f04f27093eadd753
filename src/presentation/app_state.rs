// Application state for HTTP handlers
use crate::infrastructure::http_response::RenderedPage;

#[derive(Clone)]
pub struct AppState {
    pub page: RenderedPage,
    pub debug: bool,
}
