//! Profile Repository Port
//!
//! Abstract interface for Profile persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Profile};

/// Repository interface for Profile entities
///
/// Implementations must enforce `external_id` uniqueness and report a
/// duplicate as [`DomainError::Conflict`] instead of overwriting.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Insert a new profile and return it with its assigned id
    async fn create(&self, profile: &Profile) -> Result<Profile, DomainError>;

    /// Persist nickname, external id and stats of an existing profile
    async fn update(&self, profile: &Profile) -> Result<Profile, DomainError>;

    /// Delete a profile by ID. Deleting a missing id is a no-op.
    async fn delete(&self, id: i64) -> Result<(), DomainError>;

    /// Find a profile by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Profile>, DomainError>;

    /// Find a profile by its external identifier
    async fn find_by_external_id(&self, external_id: &str)
        -> Result<Option<Profile>, DomainError>;

    /// Page of profiles ordered by id ascending
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Profile>, DomainError>;
}
