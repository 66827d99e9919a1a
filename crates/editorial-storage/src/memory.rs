//! In-memory backend for tests and ephemeral sessions.

use crate::envelope::Snapshot;
use crate::error::StorageError;
use crate::migrate;
use crate::traits::SnapshotStore;

/// Holds the serialized document in memory. Contents vanish on drop;
/// tests also use it to stage arbitrary stored text.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Starts with `text` already stored, as if a previous session had
    /// written it.
    pub fn with_document(text: impl Into<String>) -> Self {
        MemoryStore {
            document: Some(text.into()),
        }
    }

    /// The raw stored text, if anything has been saved.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        match &self.document {
            Some(text) => Ok(Some(migrate::decode_snapshot(text)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), StorageError> {
        self.document = Some(serde_json::to_string(snapshot)?);
        Ok(())
    }
}
