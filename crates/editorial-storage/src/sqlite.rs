//! SQLite backend: one row holds the whole document.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::envelope::Snapshot;
use crate::error::StorageError;
use crate::migrate;
use crate::schema;
use crate::traits::SnapshotStore;

/// Stores the serialized snapshot in the single-row `snapshot` table.
/// The row id is fixed at 1; every save rewrites it inside a transaction.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (creating and migrating as needed) the database at `path`.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        Ok(SqliteStore {
            conn: schema::open_database(path)?,
        })
    }

    /// Fresh in-memory database, for tests.
    pub fn in_memory() -> Result<Self, StorageError> {
        Ok(SqliteStore {
            conn: schema::open_in_memory()?,
        })
    }
}

impl SnapshotStore for SqliteStore {
    fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT document FROM snapshot WHERE id = 1")?;
        let text: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
        match text {
            Some(text) => Ok(Some(migrate::decode_snapshot(&text)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let text = serde_json::to_string(snapshot)?;
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO snapshot (id, document, saved_at) VALUES (1, ?1, datetime('now'))
             ON CONFLICT(id) DO UPDATE SET document = excluded.document,
                                           saved_at = excluded.saved_at",
            params![text],
        )?;
        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_database_loads_none() {
        let store = SqliteStore::in_memory().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = SqliteStore::in_memory().unwrap();
        let snapshot = Snapshot::seed();
        store.save(&snapshot).unwrap();
        assert_eq!(store.load().unwrap().unwrap(), snapshot);
    }

    #[test]
    fn repeated_saves_keep_a_single_row() {
        let mut store = SqliteStore::in_memory().unwrap();
        let mut snapshot = Snapshot::seed();
        store.save(&snapshot).unwrap();
        snapshot.posts.truncate(1);
        store.save(&snapshot).unwrap();

        let count: i64 = store
            .conn
            .query_row("SELECT COUNT(*) FROM snapshot", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(store.load().unwrap().unwrap().posts.len(), 1);
    }

    #[test]
    fn documents_survive_reopening_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("content.db");
        let snapshot = Snapshot::seed();

        {
            let mut store = SqliteStore::new(&path).unwrap();
            store.save(&snapshot).unwrap();
        }

        let reopened = SqliteStore::new(&path).unwrap();
        assert_eq!(reopened.load().unwrap().unwrap(), snapshot);
    }
}
