use anyhow::{Context, Result};
use log::info;
use serde_json::Value;

use crate::cache::{self, Cache};
use crate::config::AppConfig;
use crate::domain::{MatchBatch, PlayerProfile};
use crate::normalize::{
    extract_match_data, extract_player_profile, parse_player_summary, parse_stats_summary,
};

/// Turns the raw tier into the two normalized collections
pub struct ProcessingService {
    cache: Cache,
}

/// Outcome of one processing run
#[derive(Debug)]
pub struct ProcessingSummary {
    pub profiles: usize,
    pub games: usize,
    pub skipped: usize,
}

impl ProcessingService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            cache: Cache::from_paths(&config.paths)?,
        })
    }

    pub fn run(&self, username: &str) -> Result<ProcessingSummary> {
        info!("=== Starting Data Processing for '{}' ===\n", username);

        // Step 1: Player profiles; any failure here aborts the run
        let profiles = self.process_profiles()?;
        info!("  → Extracted {} profile rows\n", profiles.len());

        // Step 2: Games; failures are skipped per game
        let batch = self.process_games(username)?;
        info!(
            "  → Processed {} games ({} skipped)\n",
            batch.len(),
            batch.skipped_count()
        );

        // Step 3: Save clean collections
        let summary = ProcessingSummary {
            profiles: profiles.len(),
            games: batch.len(),
            skipped: batch.skipped_count(),
        };
        self.cache.save_parsed(cache::PLAYER_PROFILE_KEY, &profiles)?;
        self.cache.save_parsed(cache::MATCH_HISTORY_KEY, &batch.into_games())?;

        info!("=== Processing Complete ===");
        Ok(summary)
    }

    fn process_profiles(&self) -> Result<Vec<PlayerProfile>> {
        info!("Step 1: Extracting player profile...");
        let basic = self.cache.require_raw(cache::BASIC_KEY)?;
        let stats = self.cache.require_raw(cache::STATS_KEY)?;

        let summary = parse_player_summary(&basic)?;
        let stats = parse_stats_summary(&stats)?;
        let profiles = extract_player_profile(&summary, &stats)
            .with_context(|| format!("Failed to extract profile for {}", summary.username))?;
        Ok(profiles)
    }

    fn process_games(&self, username: &str) -> Result<MatchBatch> {
        info!("Step 2: Extracting match data...");
        let raw = self.cache.require_raw(cache::MATCH_KEY)?;
        let games = match raw {
            Value::Array(games) => games,
            _ => anyhow::bail!("Invalid JSON format in match data: expected an array of games"),
        };
        Ok(extract_match_data(username, &games))
    }
}
