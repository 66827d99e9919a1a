//! Storage error types.

use thiserror::Error;

use editorial_core::CatalogError;

/// Errors produced while loading, migrating, or persisting snapshots.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The stored document is not valid JSON or does not match the
    /// current record shape.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem failure in the JSON file backend.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// SQLite failure.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A schema migration could not be applied or a stored document could
    /// not be upgraded.
    #[error("migration error: {0}")]
    Migration(String),

    /// The document was written by a newer engine than this one.
    #[error("unsupported schema version {0}")]
    UnsupportedSchema(u32),

    /// A catalog mutation was rejected; nothing was persisted.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl StorageError {
    /// True for decode-stage failures, where opening a store may fall
    /// back to the seed collection instead of failing. I/O and database
    /// errors are never swallowed that way.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            StorageError::Serialization(_) | StorageError::Migration(_)
        )
    }
}
