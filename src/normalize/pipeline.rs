use chrono::Timelike;
use log::{log, Level};
use serde_json::Value;

use super::moves::{move_at, move_from_end, tokenize_moves};
use super::opening::build_opening_signature;
use super::perspective::resolve_perspective;
use super::result::normalize_result;
use super::tags::{clean_movetext, extract_tags};
use super::time_of_day::bucket_hour;
use crate::domain::{MatchBatch, ProcessedGame, RawGame, SkipStage, SkippedGame};
use crate::errors::NormalizeError;

/// Normalize every raw game for `username`, skipping the ones that fail.
///
/// Output order follows input order. A failing game never aborts the
/// batch; it is logged and recorded in [`MatchBatch::skipped`].
pub fn extract_match_data(username: &str, games: &[Value]) -> MatchBatch {
    games
        .iter()
        .enumerate()
        .fold(MatchBatch::new(), |mut batch, (index, raw)| {
            let outcome = decode_game(raw)
                .map_err(|e| (SkipStage::Decode, e))
                .and_then(|game| {
                    normalize_game(username, &game).map_err(|e| (SkipStage::Normalize, e))
                });
            match outcome {
                Ok(game) => batch.add(game),
                Err((stage, error)) => {
                    let skipped = SkippedGame {
                        index,
                        url: string_field(raw, "url"),
                        time_class: string_field(raw, "time_class"),
                        stage,
                        error,
                    };
                    log_skipped(&skipped);
                    batch.skip(skipped);
                }
            }
            batch
        })
}

pub fn decode_game(raw: &Value) -> Result<RawGame, NormalizeError> {
    if raw.get("white").is_none() || raw.get("black").is_none() {
        return Err(NormalizeError::malformed("missing player data"));
    }
    Ok(serde_json::from_value(raw.clone())?)
}

/// Turn one raw game into a record seen from `username`'s side
pub fn normalize_game(username: &str, game: &RawGame) -> Result<ProcessedGame, NormalizeError> {
    let movetext = clean_movetext(&game.pgn);
    let tags = extract_tags(&movetext)?;
    let start = tags.start_datetime()?;
    let duration = tags.duration_seconds()?;

    let moves = tokenize_moves(&movetext);
    let perspective = resolve_perspective(game, &moves, username)?;
    let player_moves = perspective.moves;

    Ok(ProcessedGame {
        player_name: username.to_string(),
        match_url: game.url.clone(),
        match_type: game.time_class.clone(),
        rating: perspective.rating,
        accuracy: perspective.accuracy,
        result: normalize_result(perspective.raw_result),
        first_move: move_at(player_moves, 0),
        second_move: move_at(player_moves, 1),
        third_move: move_at(player_moves, 2),
        fourth_move: move_at(player_moves, 3),
        fifth_move: move_at(player_moves, 4),
        last_fifth_move: move_from_end(player_moves, 5),
        last_fourth_move: move_from_end(player_moves, 4),
        last_third_move: move_from_end(player_moves, 3),
        last_second_move: move_from_end(player_moves, 2),
        last_move: move_from_end(player_moves, 1),
        opening_move: build_opening_signature(&game.eco, &moves),
        duration,
        time_of_day: bucket_hour(start.hour()),
        start_date: tags.start_date,
        end_date: tags.end_date,
        start_time: tags.start_time,
        end_time: tags.end_time,
    })
}

fn string_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key)?.as_str().map(str::to_string)
}

/// Undecodable records are missing data; anything later is a processing error
fn skip_level(skipped: &SkippedGame) -> Level {
    match skipped.stage {
        SkipStage::Decode => Level::Warn,
        SkipStage::Normalize => Level::Error,
    }
}

fn log_skipped(skipped: &SkippedGame) {
    let url = skipped.url.as_deref().unwrap_or("<no url>");
    let time_class = skipped.time_class.as_deref().unwrap_or("unknown");
    let reason = match skipped.stage {
        SkipStage::Decode => "Skipping game due to missing data",
        SkipStage::Normalize => "Error processing game",
    };

    log!(
        skip_level(skipped),
        "{} #{} ({}, {}): {}",
        reason, skipped.index, url, time_class, skipped.error
    );
}
