//! HTTP error mapping
//!
//! Every failure leaves the API as `{"msg": "..."}` with a status derived
//! from the domain error. Conflicts are reported as 400 Bad Request.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use bazaar::DomainError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Json(#[from] JsonRejection),

    #[error("{0}")]
    Query(#[from] QueryRejection),

    #[error("{0}")]
    Path(#[from] PathRejection),
}

pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation(_) | DomainError::Conflict(_) => StatusCode::BAD_REQUEST,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ApiError::Domain(DomainError::Repository(detail)) => {
                tracing::error!(error = %detail, "Responding with storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::Domain(e) => (status_for(&e), message(e)),
            ApiError::Json(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            ApiError::Query(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            ApiError::Path(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
        };

        (status, Json(json!({ "msg": msg }))).into_response()
    }
}

/// Client-facing text without the variant prefix used in logs
fn message(error: DomainError) -> String {
    match error {
        DomainError::Validation(m)
        | DomainError::Conflict(m)
        | DomainError::Unauthorized(m)
        | DomainError::Forbidden(m)
        | DomainError::Repository(m) => m,
        not_found @ DomainError::NotFound { .. } => not_found.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (DomainError::validation("title is required"), StatusCode::BAD_REQUEST),
            (
                DomainError::Conflict("Username already exists".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::Unauthorized("bad credentials".to_string()),
                StatusCode::UNAUTHORIZED,
            ),
            (DomainError::not_owner("Favorite", 1), StatusCode::FORBIDDEN),
            (DomainError::not_found("ItemListing", 1), StatusCode::NOT_FOUND),
            (
                DomainError::Repository("disk full".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(status_for(&error), expected);
            assert_eq!(ApiError::from(error).into_response().status(), expected);
        }
    }

    #[test]
    fn test_message_strips_prefix() {
        assert_eq!(
            message(DomainError::Conflict("Category already exists".to_string())),
            "Category already exists"
        );
        assert_eq!(
            message(DomainError::not_found("Category", 3)),
            "Category not found: 3"
        );
    }
}
