// Card domain model
use crate::error::{DashboardError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressColor {
    Warning,
    Info,
    Success,
    Danger,
}

impl ProgressColor {
    /// Bootstrap contextual name, as used in `bg-*` classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressColor::Warning => "warning",
            ProgressColor::Info => "info",
            ProgressColor::Success => "success",
            ProgressColor::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub value: u8,
    pub color: ProgressColor,
    pub striped: bool,
    pub animated: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub header: String,
    pub headline: String,
    pub description: String,
    pub progress: Progress,
    pub footnote: String,
}

impl Card {
    pub fn new(
        header: &str,
        headline: &str,
        description: &str,
        progress: u8,
        color: ProgressColor,
        footnote: &str,
    ) -> Self {
        Self {
            header: header.to_string(),
            headline: headline.to_string(),
            description: description.to_string(),
            progress: Progress {
                value: progress,
                color,
                striped: true,
                animated: true,
            },
            footnote: footnote.to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.header.trim().is_empty() {
            return Err(DashboardError::card(&self.header, "header is empty"));
        }
        if self.headline.trim().is_empty() {
            return Err(DashboardError::card(&self.header, "headline is empty"));
        }
        if self.progress.value > 100 {
            return Err(DashboardError::card(
                &self.header,
                format!("progress {}% exceeds 100%", self.progress.value),
            ));
        }
        Ok(())
    }
}
