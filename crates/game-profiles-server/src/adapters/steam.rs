//! Steam Web API client
//!
//! Implements the `ProfileSource` port with `ISteamUser/GetPlayerSummaries`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use game_profiles::{DomainError, ExternalProfile, ProfileSource};

use crate::config::SteamConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the Steam Web API
#[derive(Clone)]
pub struct SteamHttpClient {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct PlayerSummariesEnvelope {
    response: PlayerSummaries,
}

#[derive(Deserialize)]
struct PlayerSummaries {
    #[serde(default)]
    players: Vec<PlayerSummary>,
}

#[derive(Deserialize)]
struct PlayerSummary {
    personaname: Option<String>,
}

impl SteamHttpClient {
    pub fn new(config: &SteamConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    fn summaries_url(&self) -> String {
        format!("{}/ISteamUser/GetPlayerSummaries/v2/", self.base_url)
    }
}

/// Turn a GetPlayerSummaries body into the normalized profile for `steam_id`
fn parse_player_summaries(steam_id: &str, body: &str) -> Result<ExternalProfile, DomainError> {
    let envelope: PlayerSummariesEnvelope = serde_json::from_str(body)
        .map_err(|e| DomainError::Unreachable(format!("Invalid Steam API response: {e}")))?;

    let player = envelope
        .response
        .players
        .into_iter()
        .next()
        .ok_or_else(|| DomainError::UpstreamNotFound("Steam profile not found".to_string()))?;

    let nickname = player
        .personaname
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| format!("steam_{steam_id}"));

    Ok(ExternalProfile {
        external_id: steam_id.to_string(),
        nickname,
    })
}

#[async_trait]
impl ProfileSource for SteamHttpClient {
    async fn fetch_profile(
        &self,
        api_key: &str,
        external_id: &str,
    ) -> Result<ExternalProfile, DomainError> {
        tracing::debug!(steam_id = %external_id, "Fetching Steam player summary");

        let response = self
            .client
            .get(self.summaries_url())
            .query(&[("key", api_key), ("steamids", external_id)])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| DomainError::Unreachable(format!("Steam API unreachable: {e}")))?;

        if !response.status().is_success() {
            return Err(DomainError::Unreachable(format!(
                "Steam API unreachable: status {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Unreachable(format!("Steam API unreachable: {e}")))?;

        parse_player_summaries(external_id, &body)
    }
}
