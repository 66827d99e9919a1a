//! The storage adapter seam.

use crate::envelope::Snapshot;
use crate::error::StorageError;

/// A place snapshots live.
///
/// One engine owns one backend. Every save replaces the whole stored
/// document, so backends never merge and the last writer wins. Loading
/// runs the migration pipeline, so callers always see a current-schema
/// snapshot regardless of what was written.
pub trait SnapshotStore {
    /// Reads and migrates the stored document. `Ok(None)` means a fresh
    /// target with nothing written yet.
    fn load(&self) -> Result<Option<Snapshot>, StorageError>;

    /// Replaces the stored document with `snapshot`.
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), StorageError>;
}
