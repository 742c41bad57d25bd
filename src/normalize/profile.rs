use chrono::DateTime;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::{MatchVariant, PlayerProfile, PlayerSummary, StatsSummary, VariantStats};
use crate::errors::NormalizeError;

/// Decode the raw profile summary, failing on missing top-level keys
pub fn parse_player_summary(raw: &Value) -> Result<PlayerSummary, NormalizeError> {
    decode(raw, "player profile")
}

pub fn parse_stats_summary(raw: &Value) -> Result<StatsSummary, NormalizeError> {
    decode(raw, "player stats")
}

/// One profile row per variant, always in rapid, bullet, blitz order.
///
/// Profile data is expected to be complete: any missing variant fails
/// the whole projection.
pub fn extract_player_profile(
    summary: &PlayerSummary,
    stats: &StatsSummary,
) -> Result<Vec<PlayerProfile>, NormalizeError> {
    let joined = format_join_date(summary.joined)?;
    let tactics = stats
        .tactics
        .as_ref()
        .ok_or_else(|| NormalizeError::MissingStat("tactics".to_string()))?;

    MatchVariant::ALL
        .into_iter()
        .map(|variant| {
            let variant_stats = variant_stats(stats, variant)?;
            Ok(PlayerProfile {
                player_name: summary.username.clone(),
                player_league: summary.league.clone(),
                player_joined: joined.clone(),
                match_type: variant,
                current_rating: variant_stats.last.rating,
                record_win: variant_stats.record.win,
                record_loss: variant_stats.record.loss,
                record_draw: variant_stats.record.draw,
                highest_rating_tactics_played: tactics.highest.rating,
                lowest_rating_tactics_played: tactics.lowest.rating,
            })
        })
        .collect()
}

pub fn variant_stats(
    stats: &StatsSummary,
    variant: MatchVariant,
) -> Result<VariantStats, NormalizeError> {
    let key = variant.stats_key();
    let raw = stats
        .other
        .get(&key)
        .ok_or_else(|| NormalizeError::MissingStat(key.clone()))?;
    decode(raw, &key)
}

/// Unix timestamp to a `YYYY-MM-DD` calendar date (UTC)
pub fn format_join_date(timestamp: i64) -> Result<String, NormalizeError> {
    DateTime::from_timestamp(timestamp, 0)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .ok_or_else(|| NormalizeError::malformed(format!("invalid join timestamp {}", timestamp)))
}

fn decode<T: DeserializeOwned>(raw: &Value, what: &str) -> Result<T, NormalizeError> {
    serde_json::from_value(raw.clone()).map_err(|e| NormalizeError::malformed(format!("{}: {}", what, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn variant(rating: i64, win: i64) -> Value {
        json!({
            "last": { "rating": rating, "date": 1700000000, "rd": 45 },
            "best": { "rating": rating + 100 },
            "record": { "win": win, "loss": 10, "draw": 2 }
        })
    }

    fn summary() -> PlayerSummary {
        parse_player_summary(&json!({
            "username": "alice",
            "league": "Wood",
            "joined": 1_609_459_200,
            "last_online": 1_700_000_000,
            "status": "basic"
        }))
        .unwrap()
    }

    fn stats() -> StatsSummary {
        parse_stats_summary(&json!({
            "chess_rapid": variant(1200, 40),
            "chess_bullet": variant(900, 5),
            "chess_blitz": variant(1000, 17),
            "chess_daily": variant(1100, 3),
            "fide": 0,
            "tactics": {
                "highest": { "rating": 1800, "date": 1 },
                "lowest": { "rating": 400, "date": 2 }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_one_row_per_variant_in_fixed_order() {
        let profiles = extract_player_profile(&summary(), &stats()).unwrap();

        let variants: Vec<_> = profiles.iter().map(|p| p.match_type).collect();
        assert_eq!(
            variants,
            vec![MatchVariant::Rapid, MatchVariant::Bullet, MatchVariant::Blitz]
        );

        let bullet = &profiles[1];
        assert_eq!(bullet.player_name, "alice");
        assert_eq!(bullet.player_league.as_deref(), Some("Wood"));
        assert_eq!(bullet.player_joined, "2021-01-01");
        assert_eq!(bullet.current_rating, 900);
        assert_eq!(bullet.record_win, 5);
        assert_eq!(bullet.record_loss, 10);
        assert_eq!(bullet.record_draw, 2);
        assert_eq!(bullet.highest_rating_tactics_played, 1800);
        assert_eq!(bullet.lowest_rating_tactics_played, 400);
    }

    #[test]
    fn test_missing_variant_fails_whole_projection() {
        let mut stats = stats();
        stats.other.remove("chess_blitz");

        assert_eq!(
            extract_player_profile(&summary(), &stats),
            Err(NormalizeError::MissingStat("chess_blitz".to_string()))
        );
    }

    #[test]
    fn test_missing_tactics_fails() {
        let mut stats = stats();
        stats.tactics = None;
        assert!(matches!(
            extract_player_profile(&summary(), &stats),
            Err(NormalizeError::MissingStat(_))
        ));
    }

    #[test]
    fn test_malformed_variant_record() {
        let mut stats = stats();
        stats
            .other
            .insert("chess_rapid".to_string(), json!({ "last": { "rating": 1200 } }));
        assert!(matches!(
            variant_stats(&stats, MatchVariant::Rapid),
            Err(NormalizeError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_summary_requires_joined() {
        let result = parse_player_summary(&json!({ "username": "alice", "last_online": 1 }));
        assert!(matches!(result, Err(NormalizeError::MalformedInput(_))));
    }

    #[test]
    fn test_summary_without_league() {
        let summary = parse_player_summary(&json!({
            "username": "alice",
            "joined": 0,
            "last_online": 0
        }))
        .unwrap();
        assert_eq!(summary.league, None);
        assert_eq!(format_join_date(summary.joined).unwrap(), "1970-01-01");
    }
}
