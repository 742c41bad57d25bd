use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// --- API Response Structures ---

/// Raw profile summary from `/pub/player/{username}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerSummary {
    pub username: String,
    #[serde(default)]
    pub league: Option<String>,
    pub joined: i64,
    pub last_online: i64,
}

/// Raw statistics from `/pub/player/{username}/stats`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsSummary {
    #[serde(default)]
    pub tactics: Option<TacticsStats>,
    // chess_rapid, chess_daily, fide, puzzle_rush, ... all differ in shape
    #[serde(flatten)]
    pub other: HashMap<String, Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VariantStats {
    pub last: RatingPoint,
    pub record: WinLossRecord,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RatingPoint {
    pub rating: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WinLossRecord {
    pub win: i64,
    pub loss: i64,
    pub draw: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TacticsStats {
    pub highest: RatingPoint,
    pub lowest: RatingPoint,
}

/// One player's side of a raw game
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawSide {
    pub username: String,
    pub rating: Option<i64>,
    pub result: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Accuracies {
    pub white: Option<f64>,
    pub black: Option<f64>,
}

/// Raw game entry from a monthly archive
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawGame {
    pub white: RawSide,
    pub black: RawSide,
    pub accuracies: Option<Accuracies>,
    pub eco: String,
    pub pgn: String,
    pub url: Option<String>,
    pub time_class: Option<String>,
}

impl RawGame {
    pub fn side(&self, side: Side) -> &RawSide {
        match side {
            Side::White => &self.white,
            Side::Black => &self.black,
        }
    }

    pub fn accuracy(&self, side: Side) -> Option<f64> {
        let accuracies = self.accuracies.as_ref()?;
        match side {
            Side::White => accuracies.white,
            Side::Black => accuracies.black,
        }
    }
}

// --- Normalized Records ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

/// Canonical game outcome from the target player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    pub const ALL: [GameResult; 3] = [GameResult::Win, GameResult::Loss, GameResult::Draw];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameResult::Win => "win",
            GameResult::Loss => "loss",
            GameResult::Draw => "draw",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,   // 05:00-11:59
    Afternoon, // 12:00-17:59
    Evening,   // everything else
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
        }
    }
}

/// Time-control variants projected into player profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchVariant {
    Rapid,
    Bullet,
    Blitz,
}

impl MatchVariant {
    pub const ALL: [MatchVariant; 3] = [MatchVariant::Rapid, MatchVariant::Bullet, MatchVariant::Blitz];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchVariant::Rapid => "rapid",
            MatchVariant::Bullet => "bullet",
            MatchVariant::Blitz => "blitz",
        }
    }

    pub fn stats_key(&self) -> String {
        format!("chess_{}", self.as_str())
    }
}

/// Normalized game record for the target player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedGame {
    pub player_name: String,
    pub match_url: Option<String>,
    pub match_type: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub rating: Option<i64>,
    pub accuracy: Option<f64>,
    pub result: GameResult,
    pub first_move: Option<String>,
    pub second_move: Option<String>,
    pub third_move: Option<String>,
    pub fourth_move: Option<String>,
    pub fifth_move: Option<String>,
    pub last_fifth_move: Option<String>,
    pub last_fourth_move: Option<String>,
    pub last_third_move: Option<String>,
    pub last_second_move: Option<String>,
    pub last_move: Option<String>,
    pub opening_move: String,
    pub duration: i64,
    pub time_of_day: TimeOfDay,
}

/// Player statistics for one time-control variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub player_name: String,
    pub player_league: Option<String>,
    pub player_joined: String,
    pub match_type: MatchVariant,
    pub current_rating: i64,
    pub record_win: i64,
    pub record_loss: i64,
    pub record_draw: i64,
    pub highest_rating_tactics_played: i64,
    pub lowest_rating_tactics_played: i64,
}
