use anyhow::Context;
use sqlx::PgPool;
use std::sync::Arc;

mod adapters;
mod application;
mod config;
mod error;
mod models;
mod routes;
#[cfg(test)]
mod testing;

use adapters::{build_broadcaster, PgProfileRepository, SteamHttpClient};
use application::{ImportService, ProfileService, StatsService};
use config::{AppConfig, BroadcastConfig};
use game_profiles::{Broadcaster, ProfileRepository, ProfileSource};

/// Type aliases for application services wired to trait-object ports
pub type AppProfileService = ProfileService<dyn ProfileRepository>;
pub type AppStatsService = StatsService<dyn ProfileRepository, dyn Broadcaster>;
pub type AppImportService = ImportService<dyn ProfileRepository, dyn ProfileSource>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub profile_service: Arc<AppProfileService>,
    pub stats_service: Arc<AppStatsService>,
    pub import_service: Arc<AppImportService>,
    pub broadcast_config: Arc<BroadcastConfig>,
}

impl AppState {
    pub fn new(
        repo: Arc<dyn ProfileRepository>,
        source: Arc<dyn ProfileSource>,
        broadcaster: Arc<dyn Broadcaster>,
        broadcast_config: BroadcastConfig,
    ) -> Self {
        Self {
            profile_service: Arc::new(ProfileService::new(repo.clone())),
            stats_service: Arc::new(StatsService::new(repo.clone(), broadcaster)),
            import_service: Arc::new(ImportService::new(repo, source)),
            broadcast_config: Arc::new(broadcast_config),
        }
    }
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🎮 Game Profiles API initializing...");

    let config = AppConfig::from_lookup(|key| secrets.get(key));

    match &config.broadcast {
        BroadcastConfig::Pusher(pusher) => {
            tracing::info!(cluster = %pusher.cluster, "📡 Pusher broadcasting enabled");
        }
        BroadcastConfig::Disabled => {
            tracing::warn!("⚠️  Pusher credentials not set - broadcasting disabled");
        }
    }

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("✅ Database migrations completed");

    let repo = Arc::new(PgProfileRepository::new(pool));
    let steam = Arc::new(SteamHttpClient::new(&config.steam));
    let broadcaster = build_broadcaster(&config.broadcast);

    let state = AppState::new(repo, steam, broadcaster, config.broadcast);
    let router = routes::app(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Game Profiles API ready");

    Ok(router.into())
}
