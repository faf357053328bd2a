//! External Profile Source Port
//!
//! Abstract interface for third-party player-data lookups (Steam).

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Normalized profile data returned by an external source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalProfile {
    pub external_id: String,
    pub nickname: String,
}

/// Service interface for fetching player profiles from a third party
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetch a player's profile.
    ///
    /// Fails with [`DomainError::Unreachable`] when the service cannot be
    /// reached or answers with garbage, and [`DomainError::UpstreamNotFound`]
    /// when it has no such player.
    async fn fetch_profile(
        &self,
        api_key: &str,
        external_id: &str,
    ) -> Result<ExternalProfile, DomainError>;
}
