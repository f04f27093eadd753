// Error types for building and encoding the dashboard
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("invalid figure '{id}': {reason}")]
    InvalidFigure { id: String, reason: String },

    #[error("invalid card '{header}': {reason}")]
    InvalidCard { header: String, reason: String },

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("figure serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("page compression failed: {0}")]
    Compression(#[from] std::io::Error),
}

impl DashboardError {
    pub fn figure(id: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFigure {
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    pub fn card(header: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCard {
            header: header.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
