//! Stats Application Service (Use Case)
//!
//! Replaces a profile's stats and announces the change on the real-time
//! channel. The stored update is the primary result; broadcasting is
//! best-effort and its failures are only logged.

use std::sync::Arc;

use serde_json::{json, Value};

use game_profiles::validation::{validate_profile_id, validate_stats};
use game_profiles::{
    Broadcaster, DomainError, Profile, ProfileRepository, PROFILES_CHANNEL, STATS_UPDATED_EVENT,
};

/// Application service for stats updates
pub struct StatsService<R: ProfileRepository + ?Sized, B: Broadcaster + ?Sized> {
    repo: Arc<R>,
    broadcaster: Arc<B>,
}

impl<R: ProfileRepository + ?Sized, B: Broadcaster + ?Sized> StatsService<R, B> {
    pub fn new(repo: Arc<R>, broadcaster: Arc<B>) -> Self {
        Self { repo, broadcaster }
    }

    /// Replace stats of profile `id` and broadcast `stats.updated`
    pub async fn update_and_broadcast(
        &self,
        id: &Value,
        stats: &Value,
    ) -> Result<Profile, DomainError> {
        let id = validate_profile_id(id)?;
        let stats = validate_stats(stats);

        let mut profile = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Profile", id))?;

        profile.set_stats(stats);
        let updated = self.repo.update(&profile).await?;

        let payload = json!({
            "id": updated.id(),
            "external_id": updated.external_id(),
            "nickname": updated.nickname(),
            "stats": updated.stats(),
        });

        if let Err(e) = self
            .broadcaster
            .broadcast(PROFILES_CHANNEL, STATS_UPDATED_EVENT, &payload)
            .await
        {
            tracing::warn!(id, error = %e, "Failed to broadcast stats update");
        }

        Ok(updated)
    }
}
