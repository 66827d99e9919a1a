//! Typed errors for catalog mutations.

use thiserror::Error;

use crate::id::{AuthorId, PostId};

/// Errors produced by [`Catalog`] mutations.
///
/// Every variant leaves the catalog exactly as it was before the call.
///
/// [`Catalog`]: crate::catalog::Catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The referenced post does not exist in the collection.
    #[error("post not found: {id}")]
    PostNotFound { id: PostId },

    /// The referenced author does not exist in the collection.
    #[error("author not found: {id}")]
    AuthorNotFound { id: AuthorId },

    /// Refused to delete the only remaining author; posts always need a
    /// reassignment target.
    #[error("cannot delete the last remaining author")]
    LastAuthor,
}
