//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CreateProfileRequest, CreatedProfileResponse, HealthCheck, ImportFromSteamRequest,
    ProfileResponse, PusherClientConfig, ServiceIndex, StatsResponse, UpdateStatsRequest,
    UpdatedStatsResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Service endpoints
        super::service::index,
        super::service::health_check,
        // Profile endpoints
        super::profile::list_profiles,
        super::profile::create_profile,
        super::profile::get_profile,
        super::profile::delete_profile,
        // Stats endpoints
        super::stats::update_stats,
        // Import endpoints
        super::import::import_from_steam,
        // Realtime endpoints
        super::realtime::pusher_config,
    ),
    components(schemas(
        CreateProfileRequest,
        CreatedProfileResponse,
        HealthCheck,
        ImportFromSteamRequest,
        ProfileResponse,
        PusherClientConfig,
        ServiceIndex,
        StatsResponse,
        UpdateStatsRequest,
        UpdatedStatsResponse,
    )),
    tags(
        (name = "Service", description = "Index and health"),
        (name = "Profile", description = "Game profile management"),
        (name = "Stats", description = "Stats updates with real-time broadcast"),
        (name = "Import", description = "Profile import from Steam"),
        (name = "Realtime", description = "Real-time client configuration")
    ),
    info(
        title = "Game Profiles API",
        description = "Game profile storage with Steam import and real-time stats events"
    )
)]
pub struct ApiDoc;
