//! Local key-value persistence.
//!
//! All Titan state lives in a single SQLite table of string keys and JSON
//! values: the user profile, the engine progress collection, one daily brief
//! per calendar day, and one check-in log per calendar day. [`Store`] is the
//! only way the rest of the crate touches disk.

pub mod keys;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// String-keyed JSON document store backed by SQLite.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) the store at the given path, with schema initialized.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("failed to open store at {}", path.display()))?;

        // WAL keeps reads cheap while a write is in flight
        conn.pragma_update(None, "journal_mode", "WAL")?;

        init_schema(&conn).context("failed to initialize store schema")?;

        tracing::info!(path = %path.display(), "store ready");
        Ok(Self { conn })
    }

    /// Open an in-memory store for testing.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory store")?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Fetch the raw value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Insert or overwrite the value stored under `key`.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = chrono::Utc::now().to_rfc3339();
        self.conn
            .execute(
                "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3) \
                 ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
                params![key, value, now],
            )
            .with_context(|| format!("failed to write key {key}"))?;
        Ok(())
    }

    /// Remove `key`. Returns true if a value was present.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(rows > 0)
    }

    /// Remove every key starting with `prefix`. Returns the number removed.
    pub fn remove_prefix(&self, prefix: &str) -> Result<usize> {
        let pattern = format!("{}%", prefix.replace('%', "\\%").replace('_', "\\_"));
        let rows = self.conn.execute(
            "DELETE FROM kv WHERE key LIKE ?1 ESCAPE '\\'",
            params![pattern],
        )?;
        Ok(rows)
    }

    /// Deserialize the JSON document stored under `key`, if any.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key)? {
            Some(raw) => {
                let value = serde_json::from_str(&raw)
                    .with_context(|| format!("corrupt JSON under key {key}"))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Serialize `value` as JSON and store it under `key`.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );",
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Doc {
        name: String,
        count: u32,
    }

    #[test]
    fn set_get_roundtrip() {
        let store = Store::open_in_memory().unwrap();
        assert!(store.get("missing").unwrap().is_none());

        store.set("k", "v1").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v1"));

        // Overwrite replaces, never appends
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn json_roundtrip_is_exact() {
        let store = Store::open_in_memory().unwrap();
        let doc = Doc {
            name: "titan".into(),
            count: 5,
        };
        store.set_json("doc", &doc).unwrap();
        let loaded: Doc = store.get_json("doc").unwrap().unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn remove_reports_presence() {
        let store = Store::open_in_memory().unwrap();
        store.set("k", "v").unwrap();
        assert!(store.remove("k").unwrap());
        assert!(!store.remove("k").unwrap());
        assert!(store.get("k").unwrap().is_none());
    }

    #[test]
    fn remove_prefix_only_touches_matches() {
        let store = Store::open_in_memory().unwrap();
        store.set("titan_brief_2026-08-28", "a").unwrap();
        store.set("titan_brief_2026-08-29", "b").unwrap();
        store.set("titan_user", "c").unwrap();

        let removed = store.remove_prefix("titan_brief_").unwrap();
        assert_eq!(removed, 2);
        assert!(store.get("titan_user").unwrap().is_some());
    }

    #[test]
    fn corrupt_json_is_an_error_not_a_panic() {
        let store = Store::open_in_memory().unwrap();
        store.set("doc", "{not json").unwrap();
        let result: Result<Option<Doc>> = store.get_json("doc");
        assert!(result.is_err());
    }
}
