//! Authentication middleware — Bearer token extraction and JWT verification.

use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use warden_core::models::auth::TokenClaims;

use crate::AppState;
use crate::error::AppError;

/// Verified claims, stored in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedSubject(pub TokenClaims);

/// Axum middleware: extracts `Authorization: Bearer <token>`, verifies the JWT,
/// and injects `AuthenticatedSubject` into request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::TokenInvalid("Missing authorization header".into()))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::TokenInvalid("Invalid authorization scheme".into()))?;

    let claims = state.sessions.verify(token)?;

    request.extensions_mut().insert(AuthenticatedSubject(claims));

    Ok(next.run(request).await)
}
