//! Service Routes - index and health

use std::collections::BTreeMap;

use axum::{routing::get, Json, Router};

use crate::models::{HealthCheck, ServiceIndex};
use crate::AppState;

const ENDPOINTS: &[(&str, &str)] = &[
    ("GET /profiles", "List profiles"),
    ("GET /profiles/{id}", "Get profile by ID"),
    ("POST /profiles", "Create profile"),
    ("DELETE /profiles/{id}", "Delete profile"),
    ("POST /stats/update", "Update stats with real-time broadcast"),
    ("POST /import/from-steam", "Import from Steam API"),
    ("GET /pusher-config", "Get public Pusher config"),
];

/// Service index
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service index", body = ServiceIndex)
    ),
    tag = "Service"
)]
pub async fn index() -> Json<ServiceIndex> {
    Json(ServiceIndex {
        message: "Game Profiles API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ENDPOINTS
            .iter()
            .map(|(route, description)| (route.to_string(), description.to_string()))
            .collect::<BTreeMap<_, _>>(),
        documentation: "/swagger-ui".to_string(),
    })
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthCheck)
    ),
    tag = "Service"
)]
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Game Profiles API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
}
