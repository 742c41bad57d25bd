use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::PlayerProfile;

const COLUMNS: &str = "player_name, player_league, player_joined, match_type, current_rating, record_win, record_loss, record_draw, highest_rating_tactics_played, lowest_rating_tactics_played";

pub fn insert_profile(conn: &Connection, profile: &PlayerProfile) -> Result<i64> {
    let sql = format!(
        "INSERT INTO player_information ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        COLUMNS
    );

    conn.execute(
        &sql,
        params![
            profile.player_name,
            profile.player_league,
            profile.player_joined,
            profile.match_type,
            profile.current_rating,
            profile.record_win,
            profile.record_loss,
            profile.record_draw,
            profile.highest_rating_tactics_played,
            profile.lowest_rating_tactics_played,
        ],
    )
    .context("Failed to insert player profile")?;

    Ok(conn.last_insert_rowid())
}

fn parse_profile_row(row: &rusqlite::Row) -> rusqlite::Result<PlayerProfile> {
    Ok(PlayerProfile {
        player_name: row.get(0)?,
        player_league: row.get(1)?,
        player_joined: row.get(2)?,
        match_type: row.get(3)?,
        current_rating: row.get(4)?,
        record_win: row.get(5)?,
        record_loss: row.get(6)?,
        record_draw: row.get(7)?,
        highest_rating_tactics_played: row.get(8)?,
        lowest_rating_tactics_played: row.get(9)?,
    })
}

pub fn list_by_player(conn: &Connection, player_name: &str) -> Result<Vec<PlayerProfile>> {
    let sql = format!(
        "SELECT {} FROM player_information WHERE player_name = ?1 ORDER BY id",
        COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![player_name], parse_profile_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
