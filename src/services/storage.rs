use anyhow::Result;
use log::info;

use crate::cache::{self, Cache};
use crate::config::AppConfig;
use crate::database::{RecordSink, SqliteSink};
use crate::domain::{PlayerProfile, ProcessedGame};

/// Loads the clean collections and hands them to a record sink
pub struct StorageService {
    cache: Cache,
}

impl StorageService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            cache: Cache::from_paths(&config.paths)?,
        })
    }

    pub fn run<S>(&self, sink: &mut S) -> Result<()>
    where
        S: RecordSink<PlayerProfile> + RecordSink<ProcessedGame>,
    {
        info!("=== Starting Data Storage ===\n");

        info!("Importing player_information");
        let profiles: Vec<PlayerProfile> = self.load_collection(cache::PLAYER_PROFILE_KEY)?;
        let stored = RecordSink::<PlayerProfile>::store_many(&mut *sink, &profiles)?;
        info!("  → Stored {} player profile rows\n", stored);

        info!("Importing match_information");
        let games: Vec<ProcessedGame> = self.load_collection(cache::MATCH_HISTORY_KEY)?;
        let stored = RecordSink::<ProcessedGame>::store_many(&mut *sink, &games)?;
        info!("  → Stored {} matches\n", stored);

        info!("=== Storage Complete ===");
        Ok(())
    }

    pub fn run_sqlite(&self, config: &AppConfig) -> Result<()> {
        let mut sink = SqliteSink::open(&config.paths.database_path)?;
        self.run(&mut sink)
    }

    fn load_collection<T: for<'de> serde::Deserialize<'de>>(&self, name: &str) -> Result<Vec<T>> {
        self.cache
            .load_parsed(name)?
            .ok_or_else(|| anyhow::anyhow!("No {} collection found (run `process` first)", name))
    }
}
