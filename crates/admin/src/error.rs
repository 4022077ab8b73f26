//! Unified error handling for admin.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::models::{DeliveryError, HighlightError, ProductError, UserError};

/// Application-level error type for the admin panel.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation failed.
    #[error("Store error: {0}")]
    Repository(#[from] RepositoryError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::Repository(err @ RepositoryError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            Self::Repository(err @ RepositoryError::Conflict(_)) => {
                (StatusCode::CONFLICT, err.to_string())
            }
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

macro_rules! bad_request_from {
    ($($err:ty),+ $(,)?) => {
        $(
            impl From<$err> for AppError {
                fn from(err: $err) -> Self {
                    Self::BadRequest(err.to_string())
                }
            }
        )+
    };
}

bad_request_from!(ProductError, HighlightError, DeliveryError, UserError);

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
