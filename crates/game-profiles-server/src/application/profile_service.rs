//! Profile Application Service (Use Cases)
//!
//! Create, get, list and delete. Every operation validates its raw input
//! before touching the repository.

use std::sync::Arc;

use serde_json::Value;

use game_profiles::validation::{
    validate_external_id, validate_nickname, validate_pagination_params, validate_profile_id,
    validate_stats,
};
use game_profiles::{DomainError, Profile, ProfileRepository};

/// Application service for Profile CRUD operations
pub struct ProfileService<R: ProfileRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ProfileRepository + ?Sized> ProfileService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a profile from raw request values
    pub async fn create(
        &self,
        external_id: &str,
        nickname: &str,
        stats: &Value,
    ) -> Result<Profile, DomainError> {
        let external_id = validate_external_id(external_id)?;
        let nickname = validate_nickname(nickname)?;
        let stats = validate_stats(stats);

        let created = self
            .repo
            .create(&Profile::new(external_id, nickname, stats))
            .await?;

        tracing::info!(
            id = ?created.id(),
            external_id = %created.external_id(),
            "Created profile"
        );

        Ok(created)
    }

    /// Get a profile by raw ID; `None` when it does not exist
    pub async fn get(&self, id: &Value) -> Result<Option<Profile>, DomainError> {
        let id = validate_profile_id(id)?;
        self.repo.find_by_id(id).await
    }

    /// Page of profiles ordered by id
    pub async fn list(&self, limit: &Value, offset: &Value) -> Result<Vec<Profile>, DomainError> {
        let (limit, offset) = validate_pagination_params(limit, offset);
        self.repo.list(limit, offset).await
    }

    /// Delete a profile, failing with `NotFound` when it does not exist
    pub async fn delete(&self, id: &Value) -> Result<(), DomainError> {
        let id = validate_profile_id(id)?;

        if self.repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("Profile", id));
        }

        self.repo.delete(id).await?;
        tracing::info!(id, "Deleted profile");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryProfileRepository;
    use game_profiles::Stats;
    use serde_json::json;

    fn service() -> (ProfileService<InMemoryProfileRepository>, Arc<InMemoryProfileRepository>) {
        let repo = Arc::new(InMemoryProfileRepository::new());
        (ProfileService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_create_fills_default_stats_and_assigns_id() {
        let (service, repo) = service();

        let created = service.create("steam_1", "P1", &json!({})).await.unwrap();

        assert!(created.id().unwrap() > 0);
        assert_eq!(*created.stats(), Stats::new(1, 0, 0, 0));
        assert_eq!(repo.creates(), 1);
    }

    #[tokio::test]
    async fn test_create_sanitizes_and_clamps() {
        let (service, _) = service();

        let created = service
            .create(
                "  steam_2 ",
                "<i>Zed</i> & co",
                &json!({"level": 20000, "wins": "4"}),
            )
            .await
            .unwrap();

        assert_eq!(created.external_id(), "steam_2");
        assert_eq!(created.nickname(), "Zed &amp; co");
        assert_eq!(*created.stats(), Stats::new(9999, 0, 4, 0));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input_before_persisting() {
        let (service, repo) = service();

        let err = service
            .create("invalid@id#123", "P1", &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));

        let err = service.create("steam_1", "   ", &json!({})).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));

        assert_eq!(repo.creates(), 0);
    }

    #[tokio::test]
    async fn test_create_duplicate_external_id_conflicts() {
        let (service, _) = service();

        service.create("steam_1", "P1", &json!({})).await.unwrap();
        let err = service.create("steam_1", "P2", &json!({})).await.unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_get_existing_and_missing() {
        let (service, repo) = service();
        let seeded = repo.seed("steam_5", "Five", Stats::default());

        let found = service.get(&json!(seeded.id())).await.unwrap();
        assert_eq!(found.unwrap().nickname(), "Five");

        assert!(service.get(&json!(999)).await.unwrap().is_none());
        assert!(matches!(
            service.get(&json!("abc")).await,
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_list_paginates_in_id_order() {
        let (service, repo) = service();
        for i in 1..=5 {
            repo.seed(&format!("steam_{i}"), &format!("P{i}"), Stats::default());
        }

        let page = service.list(&json!(2), &json!(1)).await.unwrap();
        let ids: Vec<i64> = page.iter().filter_map(Profile::id).collect();
        assert_eq!(ids, [2, 3]);

        // limit 0 clamps to 1
        let page = service.list(&json!(0), &json!(0)).await.unwrap();
        assert_eq!(page.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_profile_is_not_found() {
        let (service, repo) = service();

        let err = service.delete(&json!(42)).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(repo.deletes(), 0);
    }

    #[tokio::test]
    async fn test_delete_existing_profile() {
        let (service, repo) = service();
        let seeded = repo.seed("steam_7", "Seven", Stats::default());
        let id = seeded.id().unwrap();

        service.delete(&json!(id)).await.unwrap();

        assert_eq!(repo.deletes(), 1);
        assert!(repo.get(id).is_none());
    }
}
