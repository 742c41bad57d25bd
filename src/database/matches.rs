use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::ProcessedGame;

const COLUMNS: &str = "player_name, match_url, match_type, start_date, end_date, start_time, end_time, rating, accuracy, result, first_move, second_move, third_move, fourth_move, fifth_move, last_fifth_move, last_fourth_move, last_third_move, last_second_move, last_move, opening_move, duration, time_of_day";

pub fn insert_match(conn: &Connection, game: &ProcessedGame) -> Result<i64> {
    let sql = format!(
        "INSERT INTO match_information ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23)",
        COLUMNS
    );

    conn.execute(
        &sql,
        params![
            game.player_name,
            game.match_url,
            game.match_type,
            game.start_date,
            game.end_date,
            game.start_time,
            game.end_time,
            game.rating,
            game.accuracy,
            game.result,
            game.first_move,
            game.second_move,
            game.third_move,
            game.fourth_move,
            game.fifth_move,
            game.last_fifth_move,
            game.last_fourth_move,
            game.last_third_move,
            game.last_second_move,
            game.last_move,
            game.opening_move,
            game.duration,
            game.time_of_day,
        ],
    )
    .context("Failed to insert match")?;

    Ok(conn.last_insert_rowid())
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<ProcessedGame> {
    Ok(ProcessedGame {
        player_name: row.get(0)?,
        match_url: row.get(1)?,
        match_type: row.get(2)?,
        start_date: row.get(3)?,
        end_date: row.get(4)?,
        start_time: row.get(5)?,
        end_time: row.get(6)?,
        rating: row.get(7)?,
        accuracy: row.get(8)?,
        result: row.get(9)?,
        first_move: row.get(10)?,
        second_move: row.get(11)?,
        third_move: row.get(12)?,
        fourth_move: row.get(13)?,
        fifth_move: row.get(14)?,
        last_fifth_move: row.get(15)?,
        last_fourth_move: row.get(16)?,
        last_third_move: row.get(17)?,
        last_second_move: row.get(18)?,
        last_move: row.get(19)?,
        opening_move: row.get(20)?,
        duration: row.get(21)?,
        time_of_day: row.get(22)?,
    })
}

pub fn list_by_player(conn: &Connection, player_name: &str) -> Result<Vec<ProcessedGame>> {
    let sql = format!(
        "SELECT {} FROM match_information WHERE player_name = ?1 ORDER BY id",
        COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![player_name], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM match_information", [], |row| row.get(0))
        .context("Failed to count matches")
}
