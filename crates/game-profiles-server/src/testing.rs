//! In-memory port implementations for unit tests

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use game_profiles::{
    Broadcaster, DomainError, ExternalProfile, Profile, ProfileRepository, ProfileSource, Stats,
};

/// Repository backed by a map, counting write calls
#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: Mutex<BTreeMap<i64, Profile>>,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a profile directly, bypassing call counters
    pub fn seed(&self, external_id: &str, nickname: &str, stats: Stats) -> Profile {
        let mut profiles = self.profiles.lock().unwrap();
        let id = profiles.keys().next_back().copied().unwrap_or(0) + 1;
        let now = Utc::now();
        let profile = Profile::restore(
            id,
            external_id.to_string(),
            nickname.to_string(),
            stats,
            now,
            now,
        );
        profiles.insert(id, profile.clone());
        profile
    }

    pub fn get(&self, id: i64) -> Option<Profile> {
        self.profiles.lock().unwrap().get(&id).cloned()
    }

    pub fn creates(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

fn conflict() -> DomainError {
    DomainError::Conflict("Profile with this external_id already exists".to_string())
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn create(&self, profile: &Profile) -> Result<Profile, DomainError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let mut profiles = self.profiles.lock().unwrap();

        if profiles
            .values()
            .any(|p| p.external_id() == profile.external_id())
        {
            return Err(conflict());
        }

        let id = profiles.keys().next_back().copied().unwrap_or(0) + 1;
        let now = Utc::now();
        let stored = Profile::restore(
            id,
            profile.external_id().to_string(),
            profile.nickname().to_string(),
            *profile.stats(),
            now,
            now,
        );
        profiles.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, profile: &Profile) -> Result<Profile, DomainError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut profiles = self.profiles.lock().unwrap();

        let id = profile
            .id()
            .ok_or_else(|| DomainError::not_found("Profile", "<unsaved>"))?;
        let existing = profiles
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("Profile", id))?;

        if profiles
            .values()
            .any(|p| p.id() != Some(id) && p.external_id() == profile.external_id())
        {
            return Err(conflict());
        }

        let stored = Profile::restore(
            id,
            profile.external_id().to_string(),
            profile.nickname().to_string(),
            *profile.stats(),
            existing.created_at().unwrap_or_else(Utc::now),
            Utc::now(),
        );
        profiles.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.profiles.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Profile>, DomainError> {
        Ok(self.get(id))
    }

    async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<Profile>, DomainError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .values()
            .find(|p| p.external_id() == external_id)
            .cloned())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Profile>, DomainError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

/// Captures broadcast calls; optionally fails every one of them
#[derive(Default)]
pub struct RecordingBroadcaster {
    events: Mutex<Vec<(String, String, serde_json::Value)>>,
    fail: bool,
}

impl RecordingBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn recorded(&self) -> Vec<(String, String, serde_json::Value)> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl Broadcaster for RecordingBroadcaster {
    async fn broadcast(
        &self,
        channel: &str,
        event: &str,
        payload: &serde_json::Value,
    ) -> Result<(), DomainError> {
        self.events
            .lock()
            .unwrap()
            .push((channel.to_string(), event.to_string(), payload.clone()));

        if self.fail {
            return Err(DomainError::Unreachable("broadcast transport down".to_string()));
        }
        Ok(())
    }
}

/// Profile source returning a canned result
pub struct StubProfileSource {
    result: Result<ExternalProfile, DomainError>,
    calls: AtomicUsize,
}

impl StubProfileSource {
    pub fn returning(external_id: &str, nickname: &str) -> Self {
        Self {
            result: Ok(ExternalProfile {
                external_id: external_id.to_string(),
                nickname: nickname.to_string(),
            }),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileSource for StubProfileSource {
    async fn fetch_profile(
        &self,
        _api_key: &str,
        _external_id: &str,
    ) -> Result<ExternalProfile, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_persists_changes_and_keeps_created_at() {
        let repo = InMemoryProfileRepository::new();
        let mut profile = repo.seed("steam_1", "P1", Stats::default());
        let created_at = profile.created_at();

        profile.set_nickname("Renamed".to_string());
        profile.set_stats(Stats::new(3, 40, 1, 0));
        let updated = repo.update(&profile).await.unwrap();

        assert_eq!(updated.nickname(), "Renamed");
        assert_eq!(*updated.stats(), Stats::new(3, 40, 1, 0));
        assert_eq!(updated.created_at(), created_at);
        assert_eq!(repo.get(profile.id().unwrap()), Some(updated));
    }

    #[tokio::test]
    async fn test_update_onto_taken_external_id_is_conflict() {
        let repo = InMemoryProfileRepository::new();
        repo.seed("steam_1", "P1", Stats::default());
        let second = repo.seed("steam_2", "P2", Stats::default());

        let clashing = Profile::restore(
            second.id().unwrap(),
            "steam_1".to_string(),
            "P2".to_string(),
            Stats::default(),
            Utc::now(),
            Utc::now(),
        );
        let err = repo.update(&clashing).await.unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(repo.get(second.id().unwrap()), Some(second));
    }

    #[tokio::test]
    async fn test_update_of_unsaved_or_missing_profile_is_not_found() {
        let repo = InMemoryProfileRepository::new();

        let unsaved = Profile::new("steam_1".to_string(), "P1".to_string(), Stats::default());
        let err = repo.update(&unsaved).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        let seeded = repo.seed("steam_1", "P1", Stats::default());
        repo.delete(seeded.id().unwrap()).await.unwrap();
        let err = repo.update(&seeded).await.unwrap_err();
        assert_eq!(err, DomainError::not_found("Profile", seeded.id().unwrap()));
    }

    #[tokio::test]
    async fn test_delete_of_missing_id_is_a_no_op() {
        let repo = InMemoryProfileRepository::new();
        let kept = repo.seed("steam_1", "P1", Stats::default());

        repo.delete(999).await.unwrap();

        assert_eq!(repo.get(kept.id().unwrap()), Some(kept));
        assert_eq!(repo.list(10, 0).await.unwrap().len(), 1);
    }
}
