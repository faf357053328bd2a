//! Broadcaster Port
//!
//! Abstract interface for publishing events to a real-time channel.
//! Delivery is best-effort: callers log failures and carry on.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Channel carrying profile events
pub const PROFILES_CHANNEL: &str = "profiles";

/// Event emitted after a profile's stats are replaced
pub const STATS_UPDATED_EVENT: &str = "stats.updated";

/// Real-time event publishing interface
///
/// # Example
///
/// ```rust,ignore
/// use game_profiles::ports::Broadcaster;
///
/// struct PusherBroadcaster { /* reqwest client */ }
///
/// #[async_trait]
/// impl Broadcaster for PusherBroadcaster {
///     async fn broadcast(&self, channel: &str, event: &str, payload: &serde_json::Value)
///         -> Result<(), DomainError>
///     {
///         // POST a signed event to the provider
///     }
/// }
/// ```
#[async_trait]
pub trait Broadcaster: Send + Sync {
    /// Publish `payload` as `event` on `channel`
    async fn broadcast(
        &self,
        channel: &str,
        event: &str,
        payload: &serde_json::Value,
    ) -> Result<(), DomainError>;
}
