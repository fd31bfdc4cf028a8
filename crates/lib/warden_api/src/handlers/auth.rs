//! Authentication request handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};

use crate::AppState;
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthenticatedSubject;
use crate::models::{CredentialsRequest, IdentityResponse, TokenResponse};

/// `POST /auth/register` — create a new identity.
pub async fn register_handler(
    State(state): State<AppState>,
    AppJson(body): AppJson<CredentialsRequest>,
) -> AppResult<(StatusCode, Json<IdentityResponse>)> {
    let identity = state
        .sessions
        .credentials()
        .register(&body.email, &body.password)
        .await?;
    Ok((StatusCode::CREATED, Json(IdentityResponse::from(identity))))
}

/// `POST /auth/login` — authenticate with email + password.
pub async fn login_handler(
    State(state): State<AppState>,
    AppJson(body): AppJson<CredentialsRequest>,
) -> AppResult<Json<TokenResponse>> {
    let session = state.sessions.login(&body.email, &body.password).await?;
    Ok(Json(TokenResponse {
        expires_in: session.expires_in(),
        access_token: session.access_token,
        token_type: "Bearer".to_string(),
    }))
}

/// `GET /auth/me` — the identity behind the bearer token, re-read from the store.
pub async fn me_handler(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthenticatedSubject>,
) -> AppResult<Json<IdentityResponse>> {
    let identity = state.sessions.identity_for(&subject.0).await?;
    Ok(Json(IdentityResponse::from(identity)))
}
