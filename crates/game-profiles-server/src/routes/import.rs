//! Import Routes - profile import from Steam

use axum::{extract::State, routing::post, Json, Router};

use game_profiles::DomainError;

use crate::error::ApiResult;
use crate::models::{ImportFromSteamRequest, ProfileResponse};
use crate::AppState;

/// Create or refresh a profile from the Steam Web API
#[utoipa::path(
    post,
    path = "/import/from-steam",
    request_body = ImportFromSteamRequest,
    responses(
        (status = 200, description = "Profile imported", body = ProfileResponse),
        (status = 400, description = "Missing or malformed key / steam_id"),
        (status = 502, description = "Steam unreachable or profile not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Import"
)]
pub async fn import_from_steam(
    State(state): State<AppState>,
    Json(payload): Json<ImportFromSteamRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let (Some(key), Some(steam_id)) = (payload.key, payload.steam_id) else {
        return Err(DomainError::invalid_input("key and steam_id are required").into());
    };

    let profile = state
        .import_service
        .import_from_steam(&key, &steam_id)
        .await?;

    Ok(Json(profile.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/import/from-steam", post(import_from_steam))
}
