pub mod moves;
pub mod opening;
pub mod perspective;
pub mod pipeline;
pub mod profile;
pub mod result;
pub mod tags;
pub mod time_of_day;

pub use moves::{tokenize_moves, SideMoves};
pub use opening::build_opening_signature;
pub use perspective::{resolve_perspective, Perspective};
pub use pipeline::{extract_match_data, normalize_game};
pub use profile::{extract_player_profile, parse_player_summary, parse_stats_summary};
pub use result::normalize_result;
pub use tags::{clean_movetext, extract_tags, GameTags};
pub use time_of_day::bucket_hour;
