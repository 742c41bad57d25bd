mod structs;

pub use structs::Cache;

/// Raw tier: API responses as fetched
pub const BASIC_KEY: &str = "basic";
pub const STATS_KEY: &str = "stats";
pub const MATCH_KEY: &str = "match";

/// Clean tier: normalized collections
pub const PLAYER_PROFILE_KEY: &str = "player_profile";
pub const MATCH_HISTORY_KEY: &str = "match_history";
