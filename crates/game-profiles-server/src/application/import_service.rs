//! Steam Import Application Service (Use Case)
//!
//! Creates or refreshes a profile from the external profile source.
//!
//! NOTE: re-importing an existing profile resets its stats to defaults,
//! discarding anything tracked locally.

use std::sync::Arc;

use game_profiles::validation::{
    sanitize_string, validate_steam_api_key, validate_steam_id, NICKNAME_MAX_LEN,
};
use game_profiles::{DomainError, Profile, ProfileRepository, ProfileSource, Stats};

/// Application service for importing profiles from Steam
pub struct ImportService<R: ProfileRepository + ?Sized, S: ProfileSource + ?Sized> {
    repo: Arc<R>,
    source: Arc<S>,
}

impl<R: ProfileRepository + ?Sized, S: ProfileSource + ?Sized> ImportService<R, S> {
    pub fn new(repo: Arc<R>, source: Arc<S>) -> Self {
        Self { repo, source }
    }

    /// Fetch `steam_id` and upsert it by external id
    pub async fn import_from_steam(
        &self,
        api_key: &str,
        steam_id: &str,
    ) -> Result<Profile, DomainError> {
        let api_key = validate_steam_api_key(api_key)?;
        let steam_id = validate_steam_id(steam_id)?;

        let fetched = self.source.fetch_profile(&api_key, &steam_id).await?;

        let nickname = match sanitize_string(&fetched.nickname, NICKNAME_MAX_LEN) {
            name if name.is_empty() => format!("steam_{}", fetched.external_id),
            name => name,
        };

        match self.repo.find_by_external_id(&fetched.external_id).await? {
            Some(mut profile) => {
                profile.set_nickname(nickname);
                profile.set_stats(Stats::default());
                let updated = self.repo.update(&profile).await?;

                tracing::info!(
                    id = ?updated.id(),
                    external_id = %updated.external_id(),
                    "Re-imported profile from Steam (stats reset)"
                );
                Ok(updated)
            }
            None => {
                let created = self
                    .repo
                    .create(&Profile::new(
                        fetched.external_id,
                        nickname,
                        Stats::default(),
                    ))
                    .await?;

                tracing::info!(
                    id = ?created.id(),
                    external_id = %created.external_id(),
                    "Imported new profile from Steam"
                );
                Ok(created)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{InMemoryProfileRepository, StubProfileSource};

    const API_KEY: &str = "ABCDEF0123456789";
    const STEAM_ID: &str = "76561198012345678";

    fn service(
        source: StubProfileSource,
    ) -> (
        ImportService<InMemoryProfileRepository, StubProfileSource>,
        Arc<InMemoryProfileRepository>,
        Arc<StubProfileSource>,
    ) {
        let repo = Arc::new(InMemoryProfileRepository::new());
        let source = Arc::new(source);
        (ImportService::new(repo.clone(), source.clone()), repo, source)
    }

    #[tokio::test]
    async fn test_new_external_id_is_created() {
        let (service, repo, _) = service(StubProfileSource::returning(STEAM_ID, "Gabe"));

        let profile = service.import_from_steam(API_KEY, STEAM_ID).await.unwrap();

        assert!(profile.id().is_some());
        assert_eq!(profile.external_id(), STEAM_ID);
        assert_eq!(profile.nickname(), "Gabe");
        assert_eq!(*profile.stats(), Stats::default());
        assert_eq!(repo.creates(), 1);
        assert_eq!(repo.updates(), 0);
    }

    #[tokio::test]
    async fn test_existing_external_id_is_overwritten_and_stats_reset() {
        let (service, repo, _) = service(StubProfileSource::returning(STEAM_ID, "NewName"));
        let seeded = repo.seed(STEAM_ID, "OldName", Stats::new(50, 12000, 30, 10));

        let profile = service.import_from_steam(API_KEY, STEAM_ID).await.unwrap();

        assert_eq!(profile.id(), seeded.id());
        assert_eq!(profile.nickname(), "NewName");
        assert_eq!(*profile.stats(), Stats::default());
        assert_eq!(repo.updates(), 1);
        assert_eq!(repo.creates(), 0);
    }

    #[tokio::test]
    async fn test_markup_in_upstream_nickname_is_neutralized() {
        let (service, _, _) =
            service(StubProfileSource::returning(STEAM_ID, "<script>x</script>"));

        let profile = service.import_from_steam(API_KEY, STEAM_ID).await.unwrap();
        assert_eq!(profile.nickname(), "x");
    }

    #[tokio::test]
    async fn test_invalid_input_skips_upstream_call() {
        let (service, repo, source) = service(StubProfileSource::returning(STEAM_ID, "Gabe"));

        let err = service
            .import_from_steam(API_KEY, "invalid-steam-id")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));

        let err = service
            .import_from_steam("bad key!", STEAM_ID)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));

        assert_eq!(source.fetches(), 0);
        assert_eq!(repo.creates(), 0);
    }

    #[tokio::test]
    async fn test_upstream_errors_propagate() {
        let (service, repo, _) = service(StubProfileSource::failing(
            DomainError::UpstreamNotFound("Steam profile not found".to_string()),
        ));

        let err = service.import_from_steam(API_KEY, STEAM_ID).await.unwrap_err();

        assert_eq!(
            err,
            DomainError::UpstreamNotFound("Steam profile not found".to_string())
        );
        assert_eq!(repo.creates(), 0);
        assert_eq!(repo.updates(), 0);
    }
}
