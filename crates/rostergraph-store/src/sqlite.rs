//! SQLite snapshot source.
//!
//! Reads the `players`, `played_for` and `played_with` tables of a snapshot
//! file into a [`GraphSnapshot`]. The connection is opened read-only and
//! rows are read in `rowid` order so the resulting neighbor order is stable
//! across reloads of the same file.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OpenFlags};
use tracing::info;

use crate::schema::SCHEMA_SQL;
use crate::types::*;
use rostergraph_core::{Error, Result};

/// Read-only handle on a SQLite snapshot file.
pub struct SqliteSource {
    conn: Connection,
    db_path: PathBuf,
}

impl SqliteSource {
    /// Open an existing snapshot file read-only.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();
        let conn = Connection::open_with_flags(
            &db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| Error::Database(format!("{}: {}", db_path.display(), e)))?;
        Ok(Self { conn, db_path })
    }

    /// Read every table into a bulk load.
    pub fn load(&self) -> Result<GraphSnapshot> {
        let snapshot = GraphSnapshot {
            players: self.load_players()?,
            tenures: self.load_tenures()?,
            teammates: self.load_teammates()?,
        };
        info!(
            "Loaded SQLite snapshot {}: {} players, {} tenures, {} teammate rows",
            self.db_path.display(),
            snapshot.players.len(),
            snapshot.tenures.len(),
            snapshot.teammates.len()
        );
        Ok(snapshot)
    }

    fn load_players(&self) -> Result<Vec<Player>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM players ORDER BY rowid")
            .map_err(|e| Error::Database(e.to_string()))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Player {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .map_err(|e| Error::Database(e.to_string()))?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| Error::Database(e.to_string()))
    }

    fn load_tenures(&self) -> Result<Vec<TenureRecord>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT player_id, club, start_year, end_year, appearances \
                 FROM played_for ORDER BY rowid",
            )
            .map_err(|e| Error::Database(e.to_string()))?;
        let rows = stmt
            .query_map([], |row| {
                let appearances: Option<i64> = row.get(4)?;
                Ok(TenureRecord {
                    player_id: row.get(0)?,
                    club: row.get(1)?,
                    start_year: row.get(2)?,
                    end_year: row.get(3)?,
                    appearances: appearances.unwrap_or(0).clamp(0, i64::from(u32::MAX)) as u32,
                })
            })
            .map_err(|e| Error::Database(e.to_string()))?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| Error::Database(e.to_string()))
    }

    fn load_teammates(&self) -> Result<Vec<TeammateRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT player_a, player_b, club, weight FROM played_with ORDER BY rowid")
            .map_err(|e| Error::Database(e.to_string()))?;
        let rows = stmt
            .query_map([], |row| {
                let weight: Option<f64> = row.get(3)?;
                Ok(TeammateRecord {
                    player_a: row.get(0)?,
                    player_b: row.get(1)?,
                    club: row.get(2)?,
                    weight: weight.unwrap_or(1.0),
                })
            })
            .map_err(|e| Error::Database(e.to_string()))?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Create a snapshot file from a bulk load.
    pub fn write(db_path: impl AsRef<Path>, snapshot: &GraphSnapshot) -> Result<()> {
        let mut conn =
            Connection::open(db_path.as_ref()).map_err(|e| Error::Database(e.to_string()))?;
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| Error::Database(format!("Schema init failed: {}", e)))?;

        let tx = conn
            .transaction()
            .map_err(|e| Error::Database(e.to_string()))?;
        {
            let mut insert_player = tx
                .prepare("INSERT INTO players (id, name) VALUES (?1, ?2)")
                .map_err(|e| Error::Database(e.to_string()))?;
            for p in &snapshot.players {
                insert_player
                    .execute(params![p.id, p.name])
                    .map_err(|e| Error::Database(e.to_string()))?;
            }

            let mut insert_tenure = tx
                .prepare(
                    "INSERT INTO played_for (player_id, club, start_year, end_year, appearances) \
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                )
                .map_err(|e| Error::Database(e.to_string()))?;
            for t in &snapshot.tenures {
                insert_tenure
                    .execute(params![t.player_id, t.club, t.start_year, t.end_year, t.appearances])
                    .map_err(|e| Error::Database(e.to_string()))?;
            }

            let mut insert_teammate = tx
                .prepare(
                    "INSERT INTO played_with (player_a, player_b, club, weight) \
                     VALUES (?1, ?2, ?3, ?4)",
                )
                .map_err(|e| Error::Database(e.to_string()))?;
            for m in &snapshot.teammates {
                insert_teammate
                    .execute(params![m.player_a, m.player_b, m.club, m.weight])
                    .map_err(|e| Error::Database(e.to_string()))?;
            }
        }
        tx.commit().map_err(|e| Error::Database(e.to_string()))?;
        Ok(())
    }
}
