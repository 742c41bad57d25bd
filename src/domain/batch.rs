use super::models::ProcessedGame;
use crate::errors::NormalizeError;

/// Where in the per-game pipeline a record failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipStage {
    /// The raw JSON could not be decoded into a game
    Decode,
    Normalize,
}

/// A raw game that could not be normalized
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedGame {
    pub index: usize,
    pub url: Option<String>,
    pub time_class: Option<String>,
    pub stage: SkipStage,
    pub error: NormalizeError,
}

/// Processed games in input order plus the games that were skipped
#[derive(Debug, Default)]
pub struct MatchBatch {
    pub games: Vec<ProcessedGame>,
    pub skipped: Vec<SkippedGame>,
}

impl MatchBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, game: ProcessedGame) {
        self.games.push(game);
    }

    pub fn skip(&mut self, skipped: SkippedGame) {
        self.skipped.push(skipped);
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn into_games(self) -> Vec<ProcessedGame> {
        self.games
    }
}
