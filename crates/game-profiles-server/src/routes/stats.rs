//! Stats Routes - stats replacement with real-time broadcast

use axum::{extract::State, routing::post, Json, Router};

use crate::error::ApiResult;
use crate::models::{UpdateStatsRequest, UpdatedStatsResponse};
use crate::AppState;

/// Replace a profile's stats and broadcast `stats.updated`
#[utoipa::path(
    post,
    path = "/stats/update",
    request_body = UpdateStatsRequest,
    responses(
        (status = 200, description = "Stats updated", body = UpdatedStatsResponse),
        (status = 400, description = "Invalid profile ID"),
        (status = 404, description = "Profile not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Stats"
)]
pub async fn update_stats(
    State(state): State<AppState>,
    Json(payload): Json<UpdateStatsRequest>,
) -> ApiResult<Json<UpdatedStatsResponse>> {
    let updated = state
        .stats_service
        .update_and_broadcast(&payload.id, &payload.stats)
        .await?;

    Ok(Json(updated.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/stats/update", post(update_stats))
}
