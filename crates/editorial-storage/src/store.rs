//! The engine facade: one catalog, one backend, write-through commits.

use editorial_core::{
    seed, Author, AuthorDraft, AuthorId, AuthorPatch, Catalog, CatalogError, Post, PostDraft,
    PostId, PostPatch, SlotKey,
};

use std::fmt;

use crate::envelope::Snapshot;
use crate::error::StorageError;
use crate::traits::SnapshotStore;

/// Owns the in-memory catalog and the backend it persists to.
///
/// Every mutation goes catalog-first and then commits the whole snapshot
/// to the backend. A rejected mutation or a failed commit leaves both the
/// catalog and the stored document as they were, so memory and storage
/// never diverge.
pub struct ContentStore {
    catalog: Catalog,
    backend: Box<dyn SnapshotStore>,
}

impl fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentStore")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

impl ContentStore {
    /// Opens a store over `backend`.
    ///
    /// Loads and migrates the stored document. An empty backend is seeded
    /// with the starter collection; so is one whose contents cannot be
    /// decoded, since unreadable data must never brick the console. I/O
    /// and database failures still propagate.
    pub fn open(backend: Box<dyn SnapshotStore>) -> Result<Self, StorageError> {
        let mut store = ContentStore {
            catalog: Catalog::new(),
            backend,
        };
        match store.backend.load() {
            Ok(Some(snapshot)) => {
                store.catalog = snapshot.into_catalog();
                tracing::info!(
                    "loaded stored collection: {} posts, {} authors",
                    store.catalog.posts().len(),
                    store.catalog.authors().len()
                );
            }
            Ok(None) => {
                tracing::info!("no stored collection, seeding");
                store.seed_and_commit()?;
            }
            Err(err) if err.is_decode() => {
                tracing::warn!("stored collection unreadable, reseeding: {}", err);
                store.seed_and_commit()?;
            }
            Err(err) => return Err(err),
        }
        Ok(store)
    }

    /// Read access to the live catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ------------------------------------------------------------------
    // Mutations (write-through)
    // ------------------------------------------------------------------

    pub fn create_post(&mut self, draft: PostDraft) -> Result<Post, StorageError> {
        self.mutate(|catalog| Ok(catalog.create_post(draft)))
    }

    pub fn update_post(&mut self, id: &PostId, patch: PostPatch) -> Result<Post, StorageError> {
        self.mutate(|catalog| catalog.update_post(id, patch))
    }

    pub fn delete_post(&mut self, id: &PostId) -> Result<bool, StorageError> {
        self.mutate(|catalog| Ok(catalog.delete_post(id)))
    }

    pub fn toggle_post_status(&mut self, id: &PostId) -> Result<Post, StorageError> {
        self.mutate(|catalog| catalog.toggle_post_status(id))
    }

    pub fn set_slot(&mut self, key: SlotKey, post: Option<PostId>) -> Result<(), StorageError> {
        self.mutate(|catalog| {
            catalog.set_slot(key, post);
            Ok(())
        })
    }

    pub fn add_author(&mut self, draft: AuthorDraft) -> Result<Author, StorageError> {
        self.mutate(|catalog| Ok(catalog.add_author(draft)))
    }

    pub fn update_author(
        &mut self,
        id: &AuthorId,
        patch: AuthorPatch,
    ) -> Result<Author, StorageError> {
        self.mutate(|catalog| catalog.update_author(id, patch))
    }

    pub fn delete_author(&mut self, id: &AuthorId) -> Result<bool, StorageError> {
        self.mutate(|catalog| catalog.delete_author(id))
    }

    /// Throws away the current collection and restores the seeds.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        tracing::info!("resetting to the seed collection");
        self.seed_and_commit()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn seed_and_commit(&mut self) -> Result<(), StorageError> {
        self.catalog = seed::catalog();
        self.commit()
    }

    /// Runs `op` against the catalog and commits on success. On a domain
    /// error or a failed commit the pre-call catalog is restored.
    fn mutate<T>(
        &mut self,
        op: impl FnOnce(&mut Catalog) -> Result<T, CatalogError>,
    ) -> Result<T, StorageError> {
        let before = self.catalog.clone();
        match op(&mut self.catalog) {
            Ok(value) => match self.commit() {
                Ok(()) => Ok(value),
                Err(err) => {
                    self.catalog = before;
                    Err(err)
                }
            },
            Err(err) => {
                self.catalog = before;
                Err(StorageError::Catalog(err))
            }
        }
    }

    fn commit(&mut self) -> Result<(), StorageError> {
        let snapshot = Snapshot::from_catalog(&self.catalog);
        self.backend.save(&snapshot)?;
        tracing::debug!("committed snapshot with {} posts", snapshot.posts.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json_file::JsonFileStore;
    use crate::memory::MemoryStore;
    use crate::sqlite::SqliteStore;
    use editorial_core::{PostStatus, PostType};
    use tempfile::tempdir;

    fn open_memory() -> ContentStore {
        ContentStore::open(Box::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn opening_an_empty_backend_seeds_the_collection() {
        let store = open_memory();
        assert_eq!(store.catalog().posts().len(), 12);
        assert_eq!(store.catalog().authors().len(), 2);
    }

    #[test]
    fn opening_unreadable_contents_falls_back_to_seeds() {
        let backend = MemoryStore::with_document("{{{ definitely not json");
        let store = ContentStore::open(Box::new(backend)).unwrap();
        assert_eq!(store.catalog().posts().len(), 12);
    }

    #[test]
    fn future_schema_versions_refuse_to_open() {
        let backend = MemoryStore::with_document(r#"{"schemaVersion": 9, "posts": []}"#);
        match ContentStore::open(Box::new(backend)) {
            Err(StorageError::UnsupportedSchema(9)) => {}
            other => panic!("expected UnsupportedSchema, got: {:?}", other),
        }
    }

    #[test]
    fn mutations_write_through_to_the_backend() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("content.json");

        let created = {
            let mut store = ContentStore::open(Box::new(JsonFileStore::new(&path))).unwrap();
            let post = store
                .create_post(PostDraft::new("Persisted Across Sessions", PostType::News))
                .unwrap();
            store.set_slot(SlotKey::News, Some(post.id.clone())).unwrap();
            post
        };

        let reopened = ContentStore::open(Box::new(JsonFileStore::new(&path))).unwrap();
        assert_eq!(reopened.catalog().posts().len(), 13);
        let featured = reopened.catalog().slot_post(SlotKey::News).unwrap();
        assert_eq!(featured.id, created.id);
    }

    #[test]
    fn rejected_mutations_change_nothing_anywhere() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("content.json");

        {
            let mut store = ContentStore::open(Box::new(JsonFileStore::new(&path))).unwrap();
            let missing = PostId("ghost".to_string());
            let err = store.update_post(&missing, PostPatch::default()).unwrap_err();
            assert!(matches!(err, StorageError::Catalog(CatalogError::PostNotFound { .. })));
            assert_eq!(store.catalog().posts().len(), 12);
        }

        let reopened = ContentStore::open(Box::new(JsonFileStore::new(&path))).unwrap();
        assert_eq!(reopened.catalog().posts().len(), 12);
    }

    #[test]
    fn sqlite_backend_round_trips_mutations() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("content.db");

        {
            let backend = SqliteStore::new(&path).unwrap();
            let mut store = ContentStore::open(Box::new(backend)).unwrap();
            let first = store.catalog().posts()[0].id.clone();
            store.toggle_post_status(&first).unwrap();
        }

        let backend = SqliteStore::new(&path).unwrap();
        let reopened = ContentStore::open(Box::new(backend)).unwrap();
        assert_eq!(reopened.catalog().posts()[0].status, PostStatus::Inactive);
    }

    #[test]
    fn reset_restores_the_seed_collection() {
        let mut store = open_memory();
        let first = store.catalog().posts()[0].id.clone();
        store.delete_post(&first).unwrap();
        assert_eq!(store.catalog().posts().len(), 11);

        store.reset().unwrap();
        assert_eq!(store.catalog().posts().len(), 12);
        assert!(store.catalog().post_by_id(&first).is_some());
    }

    #[test]
    fn author_deletion_is_atomic_through_the_facade() {
        let mut store = open_memory();
        let second = AuthorId(seed::SECONDARY_AUTHOR_ID.to_string());
        assert!(store.delete_author(&second).unwrap());
        let remaining = AuthorId(seed::PRIMARY_AUTHOR_ID.to_string());
        assert_eq!(store.catalog().authors().len(), 1);
        for post in store.catalog().posts() {
            assert_eq!(post.author, remaining);
        }

        let err = store.delete_author(&remaining).unwrap_err();
        assert!(matches!(err, StorageError::Catalog(CatalogError::LastAuthor)));
        assert_eq!(store.catalog().authors().len(), 1);
    }
}
