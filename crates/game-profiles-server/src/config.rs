//! Server configuration
//!
//! Built once at startup from the secret store and handed to the
//! adapters that need it.

use std::fmt;

pub const DEFAULT_PUSHER_CLUSTER: &str = "eu";
pub const DEFAULT_STEAM_API_BASE_URL: &str = "https://api.steampowered.com";

/// Top-level configuration for the API server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub broadcast: BroadcastConfig,
    pub steam: SteamConfig,
}

/// Real-time broadcasting mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BroadcastConfig {
    /// Credentials absent: events are dropped
    Disabled,
    Pusher(PusherConfig),
}

/// Pusher Channels credentials
#[derive(Clone, PartialEq, Eq)]
pub struct PusherConfig {
    pub app_id: String,
    pub key: String,
    pub secret: String,
    pub cluster: String,
}

/// Steam Web API settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteamConfig {
    pub base_url: String,
}

impl AppConfig {
    /// Build configuration from a key lookup (the Shuttle secret store in
    /// production). Blank values are treated as absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let cluster = get("PUSHER_CLUSTER").unwrap_or_else(|| DEFAULT_PUSHER_CLUSTER.to_string());

        let broadcast = match (get("PUSHER_APP_ID"), get("PUSHER_KEY"), get("PUSHER_SECRET")) {
            (Some(app_id), Some(key), Some(secret)) => BroadcastConfig::Pusher(PusherConfig {
                app_id,
                key,
                secret,
                cluster,
            }),
            _ => BroadcastConfig::Disabled,
        };

        let steam = SteamConfig {
            base_url: get("STEAM_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_STEAM_API_BASE_URL.to_string()),
        };

        Self { broadcast, steam }
    }
}

impl BroadcastConfig {
    /// Values safe to hand to browser clients: `(key, cluster)`
    pub fn public_client_config(&self) -> (String, String) {
        match self {
            Self::Pusher(pusher) => (pusher.key.clone(), pusher.cluster.clone()),
            Self::Disabled => (String::new(), DEFAULT_PUSHER_CLUSTER.to_string()),
        }
    }
}

impl PusherConfig {
    /// REST API origin for this app's cluster
    pub fn api_origin(&self) -> String {
        format!("https://api-{}.pusher.com", self.cluster)
    }
}

impl fmt::Debug for PusherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PusherConfig")
            .field("app_id", &self.app_id)
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .field("cluster", &self.cluster)
            .finish()
    }
}

impl Default for SteamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_STEAM_API_BASE_URL.to_string(),
        }
    }
}
