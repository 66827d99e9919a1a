//! The persisted document: one versioned snapshot of the whole collection.

use serde::{Deserialize, Serialize};

use editorial_core::{seed, Author, Catalog, Post, Slots};

/// Version written by this engine. Bump together with a new migration arm
/// in [`crate::migrate`].
pub const SCHEMA_VERSION: u32 = 2;

/// The single JSON document a backend stores.
///
/// Saving always writes the whole collection, which keeps persistence
/// trivially atomic per backend and makes the last writer win.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub schema_version: u32,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub slots: Slots,
}

impl Snapshot {
    /// Snapshot of the built-in starter collection.
    pub fn seed() -> Self {
        Snapshot::from_catalog(&seed::catalog())
    }

    /// Captures the current catalog state.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Snapshot {
            schema_version: SCHEMA_VERSION,
            posts: catalog.posts().to_vec(),
            authors: catalog.authors().to_vec(),
            slots: catalog.slots().clone(),
        }
    }

    /// Rebuilds the in-memory catalog.
    pub fn into_catalog(self) -> Catalog {
        Catalog::from_parts(self.posts, self.authors, self.slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_round_trip_preserves_everything() {
        let original = seed::catalog();
        let rebuilt = Snapshot::from_catalog(&original).into_catalog();
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn stored_document_carries_the_version_tag() {
        let value = serde_json::to_value(Snapshot::seed()).unwrap();
        assert_eq!(value["schemaVersion"], serde_json::json!(SCHEMA_VERSION));
        assert_eq!(value["posts"].as_array().unwrap().len(), 12);
        assert!(value["slots"].is_object());
    }
}
