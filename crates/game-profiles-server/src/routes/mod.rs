//! Game Profiles API Routes
//!
//! - / and /health - Service index and liveness
//! - /profiles - Profile CRUD
//! - /stats/update - Stats replacement with real-time broadcast
//! - /import/from-steam - Steam profile import
//! - /pusher-config - Public real-time client settings

pub mod import;
pub mod profile;
pub mod realtime;
pub mod service;
pub mod stats;
pub mod swagger;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::AppState;

/// Full application router with documentation and middleware
pub fn app(state: AppState) -> Router {
    let openapi = swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(service::router())
        .merge(profile::router())
        .merge(stats::router())
        .merge(import::router())
        .merge(realtime::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
