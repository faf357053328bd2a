//! Stats - Game performance tuple attached to a profile

use serde::{Deserialize, Serialize};

pub const DEFAULT_LEVEL: i64 = 1;
pub const MIN_LEVEL: i64 = 1;
pub const MAX_LEVEL: i64 = 9999;

/// Immutable stats value. Replaced wholesale, never mutated in place.
///
/// Holds whatever it is given: range clamping of untrusted input happens in
/// [`crate::validation::validate_stats`], and stored blobs are trusted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Stats {
    level: i64,
    experience: i64,
    wins: i64,
    losses: i64,
}

/// Field map form of [`Stats`], used for the stored blob.
///
/// Every key is optional; [`Stats::from_fields`] fills the gaps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wins: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub losses: Option<i64>,
}

impl Stats {
    pub fn new(level: i64, experience: i64, wins: i64, losses: i64) -> Self {
        Self {
            level,
            experience,
            wins,
            losses,
        }
    }

    pub fn level(&self) -> i64 {
        self.level
    }

    pub fn experience(&self) -> i64 {
        self.experience
    }

    pub fn wins(&self) -> i64 {
        self.wins
    }

    pub fn losses(&self) -> i64 {
        self.losses
    }

    /// All four keys, always present
    pub fn to_fields(&self) -> StatsFields {
        StatsFields {
            level: Some(self.level),
            experience: Some(self.experience),
            wins: Some(self.wins),
            losses: Some(self.losses),
        }
    }

    /// Build from a possibly partial field map, defaulting absent keys
    pub fn from_fields(fields: StatsFields) -> Self {
        Self {
            level: fields.level.unwrap_or(DEFAULT_LEVEL),
            experience: fields.experience.unwrap_or(0),
            wins: fields.wins.unwrap_or(0),
            losses: fields.losses.unwrap_or(0),
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::from_fields(StatsFields::default())
    }
}
