//! Profile request/response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use game_profiles::{Profile, Stats};

// ============================================
// Request DTOs
// ============================================

/// Create profile request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProfileRequest {
    #[serde(default)]
    pub external_id: String,
    #[serde(default)]
    pub nickname: String,
    /// Partial stats; missing or malformed fields take defaults
    #[serde(default)]
    #[schema(value_type = Object)]
    pub stats: serde_json::Value,
}

/// Replace stats request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatsRequest {
    /// Profile ID (number or numeric string)
    #[serde(default)]
    #[schema(value_type = i64)]
    pub id: serde_json::Value,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub stats: serde_json::Value,
}

/// Steam import request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ImportFromSteamRequest {
    /// Steam Web API key
    pub key: Option<String>,
    /// SteamID64
    pub steam_id: Option<String>,
}

/// Pagination query for profile listing
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListProfilesQuery {
    /// Page size, 1..=100 (default 50)
    pub limit: Option<String>,
    /// Rows to skip (default 0)
    pub offset: Option<String>,
}

// ============================================
// Response DTOs
// ============================================

/// Stats body
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub level: i64,
    pub experience: i64,
    pub wins: i64,
    pub losses: i64,
}

/// Profile body
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: Option<i64>,
    pub external_id: String,
    pub nickname: String,
    pub stats: StatsResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Returned by profile creation
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedProfileResponse {
    pub id: Option<i64>,
}

/// Returned by a stats update
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdatedStatsResponse {
    pub id: Option<i64>,
    pub stats: StatsResponse,
}

impl From<&Stats> for StatsResponse {
    fn from(stats: &Stats) -> Self {
        Self {
            level: stats.level(),
            experience: stats.experience(),
            wins: stats.wins(),
            losses: stats.losses(),
        }
    }
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id(),
            stats: profile.stats().into(),
            created_at: profile.created_at(),
            updated_at: profile.updated_at(),
            external_id: profile.external_id().to_string(),
            nickname: profile.nickname().to_string(),
        }
    }
}

impl From<Profile> for UpdatedStatsResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id(),
            stats: profile.stats().into(),
        }
    }
}
