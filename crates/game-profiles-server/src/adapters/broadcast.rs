//! Broadcaster adapters
//!
//! `PusherBroadcaster` publishes through the Pusher Channels REST API.
//! `DisabledBroadcaster` stands in when no credentials are configured.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use game_profiles::{Broadcaster, DomainError};

use crate::config::{BroadcastConfig, PusherConfig};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const AUTH_VERSION: &str = "1.0";

/// Pick the adapter matching the configured mode
pub fn build_broadcaster(config: &BroadcastConfig) -> Arc<dyn Broadcaster> {
    match config {
        BroadcastConfig::Pusher(pusher) => Arc::new(PusherBroadcaster::new(pusher.clone())),
        BroadcastConfig::Disabled => Arc::new(DisabledBroadcaster),
    }
}

/// No-op broadcaster used when real-time delivery is not configured
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledBroadcaster;

#[async_trait]
impl Broadcaster for DisabledBroadcaster {
    async fn broadcast(
        &self,
        channel: &str,
        event: &str,
        _payload: &serde_json::Value,
    ) -> Result<(), DomainError> {
        tracing::debug!(channel, event, "Broadcasting disabled, event dropped");
        Ok(())
    }
}

/// Pusher Channels REST client
pub struct PusherBroadcaster {
    client: Client,
    config: PusherConfig,
}

/// Body of `POST /apps/{app_id}/events`
#[derive(Serialize)]
struct TriggerEvent<'a> {
    name: &'a str,
    channels: [&'a str; 1],
    /// Pusher expects the event data as a JSON-encoded string
    data: String,
}

impl PusherBroadcaster {
    pub fn new(config: PusherConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn events_path(&self) -> String {
        format!("/apps/{}/events", self.config.app_id)
    }

    /// Query parameters for an authenticated request, `auth_signature` last.
    ///
    /// The signature covers `METHOD\nPATH\nQUERY` with the other parameters
    /// sorted by key.
    fn signed_query(&self, path: &str, body: &[u8], timestamp: i64) -> Vec<(String, String)> {
        use md5::{Digest, Md5};

        let mut params = vec![
            ("auth_key".to_string(), self.config.key.clone()),
            ("auth_timestamp".to_string(), timestamp.to_string()),
            ("auth_version".to_string(), AUTH_VERSION.to_string()),
            ("body_md5".to_string(), hex::encode(Md5::digest(body))),
        ];
        params.sort();

        let query = params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        let to_sign = format!("POST\n{path}\n{query}");

        params.push((
            "auth_signature".to_string(),
            sign(&self.config.secret, to_sign.as_bytes()),
        ));
        params
    }
}

/// Hex-encoded HMAC-SHA256 of `payload`
fn sign(secret: &str, payload: &[u8]) -> String {
    use hmac::{Hmac, Mac};
    use sha2::Sha256;

    type HmacSha256 = Hmac<Sha256>;

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

#[async_trait]
impl Broadcaster for PusherBroadcaster {
    async fn broadcast(
        &self,
        channel: &str,
        event: &str,
        payload: &serde_json::Value,
    ) -> Result<(), DomainError> {
        let body = serde_json::to_vec(&TriggerEvent {
            name: event,
            channels: [channel],
            data: payload.to_string(),
        })
        .map_err(|e| DomainError::Unexpected(format!("Failed to serialize event: {e}")))?;

        let path = self.events_path();
        let query = self.signed_query(&path, &body, chrono::Utc::now().timestamp());

        let response = self
            .client
            .post(format!("{}{}", self.config.api_origin(), path))
            .query(&query)
            .header("Content-Type", "application/json")
            .timeout(REQUEST_TIMEOUT)
            .body(body)
            .send()
            .await
            .map_err(|e| DomainError::Unreachable(format!("Pusher unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(DomainError::Unreachable(format!(
                "Pusher rejected event ({status}): {detail}"
            )));
        }

        tracing::debug!(channel, event, "Event published to Pusher");
        Ok(())
    }
}
