//! Profile - Game player profile aggregate
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};

use crate::domain::Stats;

/// Profile - external identity, nickname and owned stats
///
/// `id` stays `None` until storage assigns one on first insert and
/// cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    id: Option<i64>,
    external_id: String,
    nickname: String,
    stats: Stats,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Create a not-yet-persisted profile
    pub fn new(external_id: String, nickname: String, stats: Stats) -> Self {
        Self {
            id: None,
            external_id,
            nickname,
            stats,
            created_at: None,
            updated_at: None,
        }
    }

    /// Rebuild a persisted profile from storage
    pub fn restore(
        id: i64,
        external_id: String,
        nickname: String,
        stats: Stats,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            external_id,
            nickname,
            stats,
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn set_nickname(&mut self, nickname: String) {
        self.nickname = nickname;
    }

    pub fn set_stats(&mut self, stats: Stats) {
        self.stats = stats;
    }
}
