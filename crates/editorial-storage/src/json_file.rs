//! Single-file JSON backend.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::envelope::Snapshot;
use crate::error::StorageError;
use crate::migrate;
use crate::traits::SnapshotStore;

/// Stores the snapshot as one pretty-printed JSON file.
///
/// Saves write to a temp file in the target's directory and rename it
/// over the target, so a crash mid-save never leaves a half-written
/// document. An absent file loads as `None`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StorageError::Io(err)),
        };
        Ok(Some(migrate::decode_snapshot(&text)?))
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let text = serde_json::to_string_pretty(snapshot)?;
        // a bare file name has an empty parent; temp in the working dir then
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(text.as_bytes())?;
        tmp.persist(&self.path)
            .map_err(|err| StorageError::Io(err.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn absent_file_loads_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("content.json");
        let snapshot = Snapshot::seed();

        let mut store = JsonFileStore::new(&path);
        store.save(&snapshot).unwrap();

        // a fresh store over the same path sees the document
        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.load().unwrap().unwrap(), snapshot);
    }

    #[test]
    fn save_replaces_the_previous_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("content.json");
        let mut store = JsonFileStore::new(&path);

        let mut snapshot = Snapshot::seed();
        store.save(&snapshot).unwrap();
        snapshot.posts.clear();
        store.save(&snapshot).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert!(loaded.posts.is_empty());
        assert_eq!(loaded.authors.len(), 2);
    }

    #[test]
    fn legacy_file_contents_migrate_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("content.json");
        fs::write(&path, r#"[{"id": "1", "title": "Old", "type": "news"}]"#).unwrap();

        let store = JsonFileStore::new(&path);
        let snapshot = store.load().unwrap().unwrap();
        assert_eq!(snapshot.posts[0].slug, "old");
        assert_eq!(snapshot.schema_version, crate::envelope::SCHEMA_VERSION);
    }
}
