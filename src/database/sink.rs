use anyhow::{Context, Result};
use log::info;
use rusqlite::Connection;
use std::path::Path;

use super::connection::{create_pool, get_connection, DbConn};
use super::{matches, profiles, setup};
use crate::domain::{PlayerProfile, ProcessedGame};

/// Destination for normalized records; each record is stored as-is
pub trait RecordSink<T> {
    fn store_one(&mut self, record: &T) -> Result<()>;

    fn store_many(&mut self, records: &[T]) -> Result<usize> {
        for record in records {
            self.store_one(record)?;
        }
        Ok(records.len())
    }
}

/// SQLite-backed sink writing to `player_information` and `match_information`
pub struct SqliteSink {
    conn: DbConn,
}

impl SqliteSink {
    pub fn new(conn: DbConn) -> Result<Self> {
        setup::ensure_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open(database_path: &Path) -> Result<Self> {
        let pool = create_pool(database_path)?;
        let conn = get_connection(&pool)?;
        info!("Connected to database {}", database_path.display());
        Self::new(conn)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn insert_all<T>(
        &mut self,
        records: &[T],
        insert: fn(&Connection, &T) -> Result<i64>,
    ) -> Result<usize> {
        let tx = self.conn.transaction().context("Failed to begin transaction")?;
        for record in records {
            insert(&tx, record)?;
        }
        tx.commit().context("Failed to commit transaction")?;
        Ok(records.len())
    }
}

impl RecordSink<ProcessedGame> for SqliteSink {
    fn store_one(&mut self, record: &ProcessedGame) -> Result<()> {
        matches::insert_match(&self.conn, record).map(|_| ())
    }

    fn store_many(&mut self, records: &[ProcessedGame]) -> Result<usize> {
        self.insert_all(records, matches::insert_match)
    }
}

impl RecordSink<PlayerProfile> for SqliteSink {
    fn store_one(&mut self, record: &PlayerProfile) -> Result<()> {
        profiles::insert_profile(&self.conn, record).map(|_| ())
    }

    fn store_many(&mut self, records: &[PlayerProfile]) -> Result<usize> {
        self.insert_all(records, profiles::insert_profile)
    }
}
