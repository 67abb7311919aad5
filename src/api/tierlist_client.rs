use anyhow::Result;
use log::info;
use std::future::Future;

use crate::api::parsers;
use crate::config::settings::ApiSettings;
use crate::domain::{Mode, Player, PlayerDetail, PlayerId};
use crate::errors::FetchError;
use crate::http::JsonClient;

/// Anything that can supply ranking and player data
pub trait RankingSource {
    fn fetch_rankings(&self, mode: Mode) -> impl Future<Output = Result<Vec<Player>, FetchError>> + Send;

    fn fetch_player(&self, id: &PlayerId) -> impl Future<Output = Result<PlayerDetail, FetchError>> + Send;
}

/// Rankings API client
#[derive(Clone)]
pub struct TierlistClient {
    client: JsonClient,
    base_url: String,
}

impl TierlistClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = JsonClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    // --- Helper Methods ---

    fn build_rankings_url(&self, mode: Mode) -> String {
        format!("{}/rankings/{}", self.base_url, mode.as_str())
    }

    fn build_player_url(&self, id: &PlayerId) -> String {
        format!("{}/player/{}", self.base_url, urlencoding::encode(&id.0))
    }
}

impl RankingSource for TierlistClient {
    /// Fetch and normalize the player list of a mode
    async fn fetch_rankings(&self, mode: Mode) -> Result<Vec<Player>, FetchError> {
        let url = self.build_rankings_url(mode);
        info!("Loading rankings for {} from {}", mode, url);

        let payload = self.client.get_json(&url).await?;
        let players = parsers::normalize(&payload).map_err(|source| FetchError::Payload {
            url: url.clone(),
            source,
        })?;

        info!("Received {} players for {}", players.len(), mode);
        Ok(players)
    }

    /// Fetch the detail card data of one player
    async fn fetch_player(&self, id: &PlayerId) -> Result<PlayerDetail, FetchError> {
        let url = self.build_player_url(id);
        info!("Loading player {} from {}", id, url);

        let payload = self.client.get_json(&url).await?;
        parsers::parse_player_detail(&payload, id).map_err(|source| FetchError::Payload { url, source })
    }
}
