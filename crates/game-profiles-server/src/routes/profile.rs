//! Profile Routes - CRUD over game profiles
//!
//! HTTP handlers that delegate to ProfileService for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use game_profiles::DomainError;

use crate::error::ApiResult;
use crate::models::{
    CreateProfileRequest, CreatedProfileResponse, ListProfilesQuery, ProfileResponse,
};
use crate::AppState;

/// List profiles
#[utoipa::path(
    get,
    path = "/profiles",
    params(ListProfilesQuery),
    responses(
        (status = 200, description = "Profiles ordered by id", body = Vec<ProfileResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Profile"
)]
pub async fn list_profiles(
    State(state): State<AppState>,
    Query(query): Query<ListProfilesQuery>,
) -> ApiResult<Json<Vec<ProfileResponse>>> {
    let limit = query.limit.map(Value::String).unwrap_or(Value::Null);
    let offset = query.offset.map(Value::String).unwrap_or(Value::Null);

    let profiles = state.profile_service.list(&limit, &offset).await?;

    Ok(Json(profiles.into_iter().map(Into::into).collect()))
}

/// Create new profile
#[utoipa::path(
    post,
    path = "/profiles",
    request_body = CreateProfileRequest,
    responses(
        (status = 201, description = "Profile created", body = CreatedProfileResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "External ID already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Profile"
)]
pub async fn create_profile(
    State(state): State<AppState>,
    Json(payload): Json<CreateProfileRequest>,
) -> ApiResult<(StatusCode, Json<CreatedProfileResponse>)> {
    let created = state
        .profile_service
        .create(&payload.external_id, &payload.nickname, &payload.stats)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedProfileResponse { id: created.id() }),
    ))
}

/// Get profile by ID
#[utoipa::path(
    get,
    path = "/profiles/{id}",
    params(
        ("id" = i64, Path, description = "Profile ID")
    ),
    responses(
        (status = 200, description = "Profile found", body = ProfileResponse),
        (status = 400, description = "Invalid profile ID"),
        (status = 404, description = "Profile not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Profile"
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = state
        .profile_service
        .get(&Value::String(id.clone()))
        .await?
        .ok_or_else(|| DomainError::not_found("Profile", id))?;

    Ok(Json(profile.into()))
}

/// Delete profile
#[utoipa::path(
    delete,
    path = "/profiles/{id}",
    params(
        ("id" = i64, Path, description = "Profile ID")
    ),
    responses(
        (status = 204, description = "Profile deleted"),
        (status = 400, description = "Invalid profile ID"),
        (status = 404, description = "Profile not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Profile"
)]
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.profile_service.delete(&Value::String(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profiles", get(list_profiles).post(create_profile))
        .route("/profiles/:id", get(get_profile).delete(delete_profile))
}
