//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `outbreak.db` file in the configured output directory
//! with four tables: `sir`, `geo`, `people`, and `cases`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{CaseRow, GeoRow, HistoryRow, OutputError, OutputResult, SirRow};

/// Writes outbreak output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `outbreak.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        if !dir.is_dir() {
            return Err(OutputError::MissingDir(dir.to_path_buf()));
        }
        let conn = Connection::open(dir.join("outbreak.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS sir (
                 tick        INTEGER PRIMARY KEY,
                 susceptible INTEGER NOT NULL,
                 infected    INTEGER NOT NULL,
                 resistant   INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS geo (
                 tick         INTEGER NOT NULL,
                 location_id  INTEGER NOT NULL,
                 name         TEXT    NOT NULL,
                 kind         TEXT    NOT NULL,
                 latitude     REAL    NOT NULL,
                 longitude    REAL    NOT NULL,
                 contaminated INTEGER NOT NULL,
                 occupants    INTEGER NOT NULL,
                 infected     INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS people (
                 person_id   INTEGER NOT NULL,
                 tick        INTEGER NOT NULL,
                 state       TEXT    NOT NULL,
                 location_id INTEGER NOT NULL,
                 symptomatic INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS cases (
                 person_id    INTEGER PRIMARY KEY,
                 age          TEXT NOT NULL,
                 infected_at  INTEGER,
                 symptoms_at  INTEGER,
                 recovered_at INTEGER,
                 home         TEXT NOT NULL,
                 work         TEXT,
                 restaurants  TEXT NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_sir(&mut self, row: &SirRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO sir (tick, susceptible, infected, resistant) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![row.tick, row.susceptible, row.infected, row.resistant],
        )?;
        Ok(())
    }

    fn write_geo(&mut self, rows: &[GeoRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO geo \
                 (tick, location_id, name, kind, latitude, longitude, contaminated, occupants, infected) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick,
                    row.location_id,
                    row.name,
                    row.kind,
                    row.latitude,
                    row.longitude,
                    row.contaminated as i64,
                    row.occupants,
                    row.infected,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_history(&mut self, rows: &[HistoryRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO people (person_id, tick, state, location_id, symptomatic) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.person_id,
                    row.tick,
                    row.state,
                    row.location_id,
                    row.symptomatic as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_cases(&mut self, rows: &[CaseRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO cases \
                 (person_id, age, infected_at, symptoms_at, recovered_at, home, work, restaurants) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.person_id,
                    row.age,
                    row.infected_at,
                    row.symptoms_at,
                    row.recovered_at,
                    row.home,
                    row.work,
                    row.restaurants,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
