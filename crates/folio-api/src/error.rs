use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_store::StoreError;
use folio_types::api::ErrorResponse;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Payload parsed but broke a field rule.
    #[error("Validation error")]
    Validation(#[from] ValidationErrors),

    /// Body or path could not be parsed at all.
    #[error("Malformed request: {0}")]
    Malformed(String),

    /// Path id was not a valid record id.
    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(&'static str),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    /// Anything unexpected. `context` is the only text the client sees.
    #[error("{context}")]
    Internal {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    pub fn internal(context: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::Internal { context, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    errors: serde_json::to_value(&errors).ok(),
                    ..ErrorResponse::new("Validation error")
                },
            ),
            ApiError::Malformed(reason) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    errors: Some(serde_json::json!({ "body": [reason] })),
                    ..ErrorResponse::new("Validation error")
                },
            ),
            ApiError::InvalidId(reason) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    errors: Some(serde_json::json!({ "id": [reason] })),
                    ..ErrorResponse::new("Invalid id")
                },
            ),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, ErrorResponse::new(message)),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, ErrorResponse::new(message)),
            ApiError::Hashing(reason) => {
                error!("Password hashing failed: {}", reason);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Failed to register user"),
                )
            }
            ApiError::Internal { context, source } => {
                error!("{}: {}", context, source);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(context))
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    fn response_status(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn validation_returns_400() {
        let mut errors = ValidationErrors::new();
        errors.add("email", ValidationError::new("email"));
        assert_eq!(response_status(ApiError::Validation(errors)), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn malformed_returns_400() {
        assert_eq!(
            response_status(ApiError::Malformed("expected value".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn invalid_id_returns_400() {
        assert_eq!(
            response_status(ApiError::InvalidId("not a number".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn not_found_returns_404() {
        assert_eq!(
            response_status(ApiError::NotFound("Study session not found")),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn conflict_returns_409() {
        assert_eq!(
            response_status(ApiError::Conflict("Username already taken")),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn internal_returns_500() {
        let err = ApiError::internal("Failed to fetch messages")(StoreError::Poisoned);
        assert_eq!(response_status(err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
