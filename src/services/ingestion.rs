use anyhow::Result;
use log::info;
use serde_json::Value;

use crate::api::ChessComClient;
use crate::cache::{self, Cache};
use crate::config::AppConfig;
use crate::domain::MonthIterator;
use crate::errors::with_parse_context;
use crate::normalize::parse_player_summary;

/// Fetches a player's raw profile, stats and games into the raw tier
pub struct IngestionService {
    cache: Cache,
    api_client: ChessComClient,
}

impl IngestionService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            cache: Cache::from_paths(&config.paths)?,
            api_client: ChessComClient::new(&config.api)?,
        })
    }

    pub async fn run(&mut self, username: &str) -> Result<()> {
        info!("=== Starting Data Ingestion for '{}' ===\n", username);

        // Step 1: Profile summary
        let profile = self.fetch_profile(username).await?;

        // Step 2: Statistics
        self.fetch_stats(username).await?;

        // Step 3: Monthly archives between joined and last_online
        let months = Self::archive_months(&profile)?;
        let game_count = self.fetch_games(username, months).await?;
        info!("  → Fetched {} games\n", game_count);

        info!("=== Ingestion Complete ===");
        Ok(())
    }

    async fn fetch_profile(&mut self, username: &str) -> Result<Value> {
        info!("Step 1: Fetching profile...");
        let profile = self.api_client.fetch_profile(username).await?;
        self.cache.save_raw(cache::BASIC_KEY, &profile)?;
        Ok(profile)
    }

    async fn fetch_stats(&mut self, username: &str) -> Result<()> {
        info!("Step 2: Fetching stats...");
        let stats = self.api_client.fetch_stats(username).await?;
        self.cache.save_raw(cache::STATS_KEY, &stats)
    }

    async fn fetch_games(&mut self, username: &str, months: MonthIterator) -> Result<usize> {
        info!("Step 3: Fetching monthly game archives...");
        let games = self.api_client.fetch_games(username, months).await?;
        let count = games.len();
        self.cache.save_raw(cache::MATCH_KEY, &Value::Array(games))?;
        Ok(count)
    }

    fn archive_months(profile: &Value) -> Result<MonthIterator> {
        let summary = with_parse_context(parse_player_summary(profile), "profile response")?;
        let months = MonthIterator::between_timestamps(summary.joined, summary.last_online)?;
        Ok(months)
    }
}
