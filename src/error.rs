use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::logic::commands::BlockedCommand;
use crate::models::request::ErrorResponse;

/// Failures surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Probe '{0}' not found.")]
    NotFound(u64),

    /// A single-step move was refused.
    #[error("Blocked or out of bounds")]
    Blocked,

    /// A command string was halted by a refused move.
    #[error("Blocked or out of bounds at command: {}", .0.command)]
    BlockedAt(BlockedCommand),

    #[error("{0}")]
    Validation(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Blocked | ApiError::BlockedAt(_) | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = ErrorResponse::new(self.to_string());
        if let ApiError::BlockedAt(b) = self {
            body.index = Some(b.index);
            body.command = Some(b.command);
        }
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Invalid startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be an integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must be strictly positive, got {value}")]
    NonPositive { name: &'static str, value: i32 },

    #[error("invalid obstacle '{0}', expected 'x,y'")]
    InvalidObstacle(String),
}
