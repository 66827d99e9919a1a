//! Snapshot persistence for the editorial catalog.
//!
//! # Architecture
//!
//! The persisted unit is always one [`Snapshot`]: a versioned JSON
//! document holding the whole collection. Backends implement the small
//! [`SnapshotStore`] trait and only ever store or hand back that
//! document; the [`migrate`] pipeline upgrades whatever historical shape
//! was on disk before a backend returns it. [`ContentStore`] sits on top,
//! owning a live [`Catalog`](editorial_core::Catalog) plus one backend
//! and committing the full snapshot after every successful mutation.
//!
//! # Modules
//!
//! - [`envelope`]: the versioned snapshot document
//! - [`migrate`]: upgrades for historical document shapes
//! - [`traits`]: the `SnapshotStore` adapter seam
//! - [`memory`]: in-memory backend
//! - [`json_file`]: single JSON file backend with atomic writes
//! - [`sqlite`]: SQLite backend
//! - [`schema`]: SQLite bootstrap and migrations
//! - [`store`]: the write-through `ContentStore` facade
//! - [`error`]: storage error types

pub mod envelope;
pub mod error;
pub mod json_file;
pub mod memory;
pub mod migrate;
pub mod schema;
pub mod sqlite;
pub mod store;
pub mod traits;

pub use envelope::{Snapshot, SCHEMA_VERSION};
pub use error::StorageError;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use store::ContentStore;
pub use traits::SnapshotStore;
