//! Failure taxonomy of the auth flows and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::auth::repo::StoreError;

/// One client-correctable violation on a request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Email not found in the request headers")]
    MissingIdentity,

    #[error("User not found")]
    UserNotFound,

    #[error("Wrong password")]
    WrongPassword,

    #[error("JWT_SECRET is not configured")]
    Configuration,

    #[error("internal error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for AuthError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateEmail => AuthError::DuplicateEmail,
            StoreError::Database(e) => AuthError::Internal(anyhow::Error::new(e).context("user store")),
            StoreError::Other(e) => AuthError::Internal(e.context("user store")),
        }
    }
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) | AuthError::DuplicateEmail | AuthError::MissingIdentity => {
                StatusCode::BAD_REQUEST
            }
            AuthError::UserNotFound | AuthError::WrongPassword => StatusCode::NOT_FOUND,
            AuthError::Configuration | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AuthError::Validation(errors) => (status, Json(json!({ "errors": errors }))).into_response(),
            AuthError::Configuration => {
                error!("JWT_SECRET is not configured");
                (status, "Server configuration error").into_response()
            }
            AuthError::Internal(e) => {
                error!(error = ?e, "internal server error");
                (status, "Internal server error").into_response()
            }
            other => (status, Json(json!({ "error": other.to_string() }))).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_taxonomy() {
        assert_eq!(AuthError::Validation(vec![]).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::DuplicateEmail.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::MissingIdentity.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::UserNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AuthError::WrongPassword.status(), StatusCode::NOT_FOUND);
        assert_eq!(AuthError::Configuration.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            AuthError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_duplicate_maps_to_duplicate_email() {
        let err: AuthError = StoreError::DuplicateEmail.into();
        assert!(matches!(err, AuthError::DuplicateEmail));
    }

    #[test]
    fn store_failure_maps_to_internal() {
        let err: AuthError = StoreError::Other(anyhow::anyhow!("connection reset")).into();
        assert!(matches!(err, AuthError::Internal(_)));
    }
}
