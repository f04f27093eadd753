// Infrastructure layer - Configuration, rendering and response encoding
pub mod config;
pub mod html;
pub mod http_response;
