//! Real-time Routes - client settings for subscribing to profile events

use axum::{extract::State, routing::get, Json, Router};

use crate::models::PusherClientConfig;
use crate::AppState;

/// Public Pusher settings for browser clients (never the secret)
#[utoipa::path(
    get,
    path = "/pusher-config",
    responses(
        (status = 200, description = "Public Pusher settings", body = PusherClientConfig)
    ),
    tag = "Realtime"
)]
pub async fn pusher_config(State(state): State<AppState>) -> Json<PusherClientConfig> {
    let (key, cluster) = state.broadcast_config.public_client_config();
    Json(PusherClientConfig { key, cluster })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/pusher-config", get(pusher_config))
}
