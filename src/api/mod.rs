mod service;

pub use service::{
    CatalogEntry, CatalogListing, NutriService, RecommendationsResult, SessionStage, SessionStatus,
};

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use crate::types::Source;

/// Progress callback for CLI spinners or any embedding UI
pub type ProgressCallback = Arc<dyn Fn(ProgressEvent) + Send + Sync>;

/// Progress events emitted by long-running steps
#[derive(Clone, Debug)]
pub enum ProgressEvent {
    Started { task: String },
    Progress { task: String, current: u64, total: u64 },
    Message { task: String, message: String },
    Completed { task: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Request-level failures. Meal plan generation problems never surface here; they
/// resolve to a degraded plan instead.
#[derive(Debug, Error, Serialize)]
pub enum ApiError {
    #[error("Unsupported file format: {0}. Upload a raw data export from {accepted}", accepted = Source::ACCEPTED)]
    UnsupportedFormat(String),

    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl ApiError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Store(err.to_string())
    }
}
