//! Profile CRUD request handlers (`/user`).

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use warden_core::models::profile::{NewProfile, ProfilePatch};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::models::{CreateProfileRequest, DeleteResponse, ProfileResponse, UpdateProfileRequest};

/// Ids arrive as path text and must parse as integers.
fn parse_id(raw: &str) -> AppResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("Invalid profile id: {raw}")))
}

/// `POST /user` — create a profile.
pub async fn create_profile_handler(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateProfileRequest>,
) -> AppResult<(StatusCode, Json<ProfileResponse>)> {
    let profile = state.profiles.create(&NewProfile::from(body)).await?;
    Ok((StatusCode::CREATED, Json(ProfileResponse::from(profile))))
}

/// `GET /user` — list all profiles.
pub async fn list_profiles_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProfileResponse>>> {
    let profiles = state.profiles.list().await?;
    Ok(Json(profiles.into_iter().map(ProfileResponse::from).collect()))
}

/// `GET /user/{id}` — fetch one profile.
pub async fn get_profile_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProfileResponse>> {
    let profile = state.profiles.get(parse_id(&id)?).await?;
    Ok(Json(ProfileResponse::from(profile)))
}

/// `PATCH /user/{id}` — partially update a profile.
pub async fn update_profile_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<UpdateProfileRequest>,
) -> AppResult<Json<ProfileResponse>> {
    let profile = state
        .profiles
        .update(parse_id(&id)?, &ProfilePatch::from(body))
        .await?;
    Ok(Json(ProfileResponse::from(profile)))
}

/// `DELETE /user/{id}` — remove a profile.
pub async fn delete_profile_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    state.profiles.delete(parse_id(&id)?).await?;
    Ok(Json(DeleteResponse {
        message: "Profile deleted".to_string(),
    }))
}
