use anyhow::{Context, Result};
use log::info;
use serde_json::Value;

use crate::api::parsers;
use crate::config::ApiSettings;
use crate::domain::{ArchiveMonth, FetchProgress, MonthIterator};
use crate::http::RateLimitedClient;

/// chess.com published-data API client
pub struct ChessComClient {
    client: RateLimitedClient,
    base_url: String,
}

impl ChessComClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = RateLimitedClient::new(settings)?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the profile summary (username, league, joined, last_online)
    pub async fn fetch_profile(&mut self, username: &str) -> Result<Value> {
        let url = self.build_player_url(username);
        info!("Fetching profile for {}", username);
        self.client.get_json(&url).await
    }

    /// Fetch per-variant ratings, records and tactics stats
    pub async fn fetch_stats(&mut self, username: &str) -> Result<Value> {
        let url = format!("{}/stats", self.build_player_url(username));
        info!("Fetching stats for {}", username);
        self.client.get_json(&url).await
    }

    /// Fetch one monthly archive and return its games
    pub async fn fetch_archive(&mut self, username: &str, month: ArchiveMonth) -> Result<Vec<Value>> {
        let url = self.build_archive_url(username, month);
        let data = self.client.get_json(&url).await?;
        parsers::extract_games(&data).with_context(|| format!("Invalid archive at {}", url))
    }

    /// Fetch and concatenate every archive in `months`, oldest first
    pub async fn fetch_games(&mut self, username: &str, months: MonthIterator) -> Result<Vec<Value>> {
        let months: Vec<ArchiveMonth> = months.collect();
        info!("Fetching {} monthly archives for {}", months.len(), username);

        let mut progress = FetchProgress::new(months.len());
        let mut games = Vec::new();

        for month in months {
            let archive = self.fetch_archive(username, month).await?;
            progress.record_archive(archive.len());
            games.extend(archive);
        }

        Ok(games)
    }

    // --- Helper Methods ---

    fn build_player_url(&self, username: &str) -> String {
        build_player_url(&self.base_url, username)
    }

    fn build_archive_url(&self, username: &str, month: ArchiveMonth) -> String {
        format!(
            "{}/games/{}/{:02}",
            self.build_player_url(username),
            month.year,
            month.month
        )
    }
}

fn build_player_url(base_url: &str, username: &str) -> String {
    format!("{}/pub/player/{}", base_url, username.to_lowercase())
}
