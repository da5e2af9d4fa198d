//! Core SnapStore implementation

use chrono::Utc;
use eyre::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};

/// A named snapshot store backed by a single SQLite file.
///
/// Values are serialized to JSON and upserted by name. The connection is
/// wrapped in a mutex so the store can be shared across async tasks.
pub struct SnapStore {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl SnapStore {
    /// Open or create a store at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create store directory")?;
        }

        let conn = Connection::open(&path).context(format!("Failed to open store at {}", path.display()))?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS snapshots (
                name       TEXT PRIMARY KEY,
                data       TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );",
        )
        .context("Failed to create snapshots table")?;

        debug!(path = %path.display(), "Opened snapshot store");
        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// Open an in-memory store (useful for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory store")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS snapshots (
                name       TEXT PRIMARY KEY,
                data       TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );",
        )
        .context("Failed to create snapshots table")?;

        Ok(Self {
            conn: Mutex::new(conn),
            path: PathBuf::from(":memory:"),
        })
    }

    /// Save a value under the given name, replacing any previous value
    pub fn save<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let data = serde_json::to_string(value).context("Failed to serialize snapshot")?;
        let now = Utc::now().timestamp_millis();

        let conn = self.conn.lock().expect("store mutex poisoned");
        conn.execute(
            "INSERT INTO snapshots (name, data, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(name) DO UPDATE SET data = excluded.data, updated_at = excluded.updated_at",
            params![name, data, now],
        )
        .context(format!("Failed to save snapshot '{}'", name))?;

        info!(name, bytes = data.len(), "Saved snapshot");
        Ok(())
    }

    /// Load the value saved under the given name, if any
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let conn = self.conn.lock().expect("store mutex poisoned");
        let data: Option<String> = conn
            .query_row("SELECT data FROM snapshots WHERE name = ?1", params![name], |row| {
                row.get(0)
            })
            .optional()
            .context(format!("Failed to load snapshot '{}'", name))?;

        match data {
            Some(data) => {
                debug!(name, bytes = data.len(), "Loaded snapshot");
                let value = serde_json::from_str(&data).context(format!("Failed to deserialize snapshot '{}'", name))?;
                Ok(Some(value))
            }
            None => {
                debug!(name, "No snapshot found");
                Ok(None)
            }
        }
    }

    /// Unix-millisecond timestamp of the last save for the given name
    pub fn updated_at(&self, name: &str) -> Result<Option<i64>> {
        let conn = self.conn.lock().expect("store mutex poisoned");
        let ts = conn
            .query_row(
                "SELECT updated_at FROM snapshots WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()
            .context(format!("Failed to read timestamp for snapshot '{}'", name))?;
        Ok(ts)
    }

    /// Delete the snapshot saved under the given name
    ///
    /// Returns true if a snapshot was deleted.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let conn = self.conn.lock().expect("store mutex poisoned");
        let deleted = conn
            .execute("DELETE FROM snapshots WHERE name = ?1", params![name])
            .context(format!("Failed to delete snapshot '{}'", name))?;
        if deleted > 0 {
            info!(name, "Deleted snapshot");
        }
        Ok(deleted > 0)
    }

    /// List all snapshot names in the store
    pub fn names(&self) -> Result<Vec<String>> {
        let conn = self.conn.lock().expect("store mutex poisoned");
        let mut stmt = conn
            .prepare("SELECT name FROM snapshots ORDER BY name")
            .context("Failed to prepare names query")?;
        let names = stmt
            .query_map([], |row| row.get(0))
            .context("Failed to list snapshot names")?
            .collect::<Result<Vec<String>, _>>()
            .context("Failed to read snapshot names")?;
        Ok(names)
    }

    /// Path of the backing database file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
