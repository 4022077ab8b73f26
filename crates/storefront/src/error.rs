//! Unified error handling.
//!
//! Every failure a handler can hit is a client error, so `AppError` maps
//! straight to a 4xx JSON body. All route handlers should return
//! `Result<T, AppError>`. Breadcrumbs for Sentry are recorded through
//! [`add_breadcrumb`].

use atadiesel_core::{AddressError, CepError, LoyaltyError, VisitError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::OrderError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request conflicts with the current state of the resource.
    #[error("Conflict: {0}")]
    Conflict(String),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<CepError> for AppError {
    fn from(err: CepError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<AddressError> for AppError {
    fn from(err: AddressError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<LoyaltyError> for AppError {
    fn from(err: LoyaltyError) -> Self {
        match err {
            LoyaltyError::UnknownReward(_) => Self::NotFound(err.to_string()),
            LoyaltyError::InsufficientPoints { .. } => Self::Conflict(err.to_string()),
        }
    }
}

impl From<VisitError> for AppError {
    fn from(err: VisitError) -> Self {
        Self::Conflict(err.to_string())
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound(_) => Self::NotFound(err.to_string()),
            OrderError::InvalidReview(_) => Self::BadRequest(err.to_string()),
            OrderError::NotFinished(_) | OrderError::AlreadyReviewed(_) => {
                Self::Conflict(err.to_string())
            }
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for customer actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of actions
/// leading up to an error.
pub fn add_breadcrumb(category: &str, message: &str, data: &[(&str, &str)]) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    for (key, value) in data {
        breadcrumb.data.insert(
            (*key).to_string(),
            serde_json::Value::String((*value).to_string()),
        );
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("order ORD-123".to_string());
        assert_eq!(err.to_string(), "Not found: order ORD-123");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            let response = err.into_response();
            response.status()
        }

        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Conflict("test".to_string())),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_domain_error_mapping() {
        assert!(matches!(
            AppError::from(CepError::Empty),
            AppError::BadRequest(_)
        ));
        assert!(matches!(
            AppError::from(LoyaltyError::InsufficientPoints {
                needed: 100,
                available: 5
            }),
            AppError::Conflict(_)
        ));
        assert!(matches!(
            AppError::from(LoyaltyError::UnknownReward("x".to_string())),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            AppError::from(VisitError::QrExpired),
            AppError::Conflict(_)
        ));
    }
}
