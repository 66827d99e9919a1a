//! Core data model for the editorial content engine.
//!
//! # Architecture
//!
//! Everything revolves around [`Catalog`], the in-memory collection of
//! posts, authors, and slot assignments. Mutations go through its methods
//! so derived fields (slugs, reading times, legacy mirrors) are
//! recomputed in one place and cross-references stay consistent. The
//! crate does no I/O; persistence lives in `editorial-storage`.
//!
//! # Modules
//!
//! - [`id`]: newtype identifiers for posts, authors, and blocks
//! - [`slug`]: slug derivation from titles
//! - [`readtime`]: reading-time estimation
//! - [`block`]: the content block variants
//! - [`seo`]: SEO metadata and the readiness checklist
//! - [`author`]: authors and their inputs
//! - [`slots`]: the fixed navigation slot board
//! - [`post`]: the post record, drafts, and patches
//! - [`catalog`]: the collection and its CRUD plus queries
//! - [`seed`]: the built-in starter collection
//! - [`error`]: typed mutation errors

pub mod author;
pub mod block;
pub mod catalog;
pub mod error;
pub mod id;
pub mod post;
pub mod readtime;
pub mod seed;
pub mod seo;
pub mod slots;
pub mod slug;

pub use author::{Author, AuthorDraft, AuthorPatch};
pub use block::{Block, BlockKind};
pub use catalog::Catalog;
pub use error::CatalogError;
pub use id::{AuthorId, BlockId, PostId};
pub use post::{Post, PostDraft, PostPatch, PostStatus, PostType};
pub use readtime::ReadTime;
pub use seo::{Seo, SeoReport};
pub use slots::{SlotKey, Slots};
pub use slug::slugify;
