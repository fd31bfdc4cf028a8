//! Application error types.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;
use warden_core::auth::AuthError;
use warden_core::profile::ProfileError;

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
///
/// Each fault kind keeps its own machine-readable code in the response body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Duplicate identity: {0}")]
    DuplicateIdentity(String),

    #[error("Identity not found: {0}")]
    IdentityNotFound(String),

    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    #[error("Token invalid: {0}")]
    TokenInvalid(String),

    #[error("Subject not found: {0}")]
    SubjectNotFound(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Status code and error code for this fault.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::DuplicateIdentity(_) => (StatusCode::CONFLICT, "duplicate_identity"),
            AppError::IdentityNotFound(_) => (StatusCode::NOT_FOUND, "identity_not_found"),
            AppError::InvalidCredential(_) => (StatusCode::UNAUTHORIZED, "invalid_credential"),
            AppError::TokenInvalid(_) => (StatusCode::UNAUTHORIZED, "token_invalid"),
            AppError::SubjectNotFound(_) => (StatusCode::NOT_FOUND, "subject_not_found"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = match &self {
            AppError::Validation(m)
            | AppError::DuplicateIdentity(m)
            | AppError::IdentityNotFound(m)
            | AppError::InvalidCredential(m)
            | AppError::TokenInvalid(m)
            | AppError::SubjectNotFound(m)
            | AppError::NotFound(m) => m.clone(),
            AppError::Internal(detail) => {
                error!(detail = %detail, "internal error");
                "Internal server error".to_string()
            }
        };
        let body = Json(ErrorResponse {
            error: code.to_string(),
            message,
        });
        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        let message = e.to_string();
        match e {
            AuthError::DuplicateIdentity => AppError::DuplicateIdentity(message),
            AuthError::IdentityNotFound => AppError::IdentityNotFound(message),
            AuthError::InvalidCredential => AppError::InvalidCredential(message),
            AuthError::TokenInvalid(reason) => AppError::TokenInvalid(reason),
            AuthError::SubjectNotFound => AppError::SubjectNotFound(message),
            AuthError::ValidationError(msg) => AppError::Validation(msg),
            AuthError::DbError(_) | AuthError::Internal(_) => AppError::Internal(message),
        }
    }
}

impl From<ProfileError> for AppError {
    fn from(e: ProfileError) -> Self {
        let message = e.to_string();
        match e {
            ProfileError::NotFound(_) => AppError::NotFound(message),
            ProfileError::Validation(msg) => AppError::Validation(msg),
            ProfileError::DbError(_) => AppError::Internal(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_faults_keep_distinct_codes() {
        let cases = [
            (AuthError::DuplicateIdentity, StatusCode::CONFLICT, "duplicate_identity"),
            (AuthError::IdentityNotFound, StatusCode::NOT_FOUND, "identity_not_found"),
            (AuthError::InvalidCredential, StatusCode::UNAUTHORIZED, "invalid_credential"),
            (
                AuthError::TokenInvalid("token expired".into()),
                StatusCode::UNAUTHORIZED,
                "token_invalid",
            ),
            (AuthError::SubjectNotFound, StatusCode::NOT_FOUND, "subject_not_found"),
        ];
        for (err, status, code) in cases {
            assert_eq!(AppError::from(err).status_and_code(), (status, code));
        }
    }

    #[test]
    fn profile_not_found_maps_to_404() {
        let err = AppError::from(ProfileError::NotFound(7));
        assert_eq!(err.status_and_code(), (StatusCode::NOT_FOUND, "not_found"));
        assert!(matches!(err, AppError::NotFound(ref m) if m.contains('7')));
    }

    #[tokio::test]
    async fn internal_detail_is_not_exposed() {
        let resp = AppError::Internal("connection refused on 10.0.0.5".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "internal_error");
        assert_eq!(json["message"], "Internal server error");
    }
}
