//! Service-level response DTOs

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

/// Liveness probe body
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
    pub version: String,
}

/// Root index listing the available endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceIndex {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
    pub documentation: String,
}

/// Public real-time client settings
#[derive(Debug, Serialize, ToSchema)]
pub struct PusherClientConfig {
    /// Empty when broadcasting is disabled
    pub key: String,
    pub cluster: String,
}
