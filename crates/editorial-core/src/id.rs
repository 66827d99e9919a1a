//! Stable identifiers for catalog entities.
//!
//! Ids are opaque strings: seed records carry short numeric ids (`"1"`,
//! `"12"`) while records created at runtime get UUID-backed ids. The
//! wrappers keep post, author, and block ids from being mixed up in
//! signatures.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies a post within the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub String);

impl PostId {
    /// Mints a fresh unique id.
    pub fn generate() -> Self {
        PostId(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(raw: &str) -> Self {
        PostId(raw.to_string())
    }
}

/// Identifies an author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub String);

impl AuthorId {
    /// Mints a fresh author id with the conventional `author_` prefix.
    pub fn generate() -> Self {
        AuthorId(format!("author_{}", Uuid::new_v4()))
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for AuthorId {
    fn from(raw: &str) -> Self {
        AuthorId(raw.to_string())
    }
}

/// Identifies one content block inside a post body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub String);

impl BlockId {
    pub fn generate() -> Self {
        BlockId(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip_is_a_bare_string() {
        let id = PostId("42".to_string());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"42\"");
        let back: PostId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(PostId::generate(), PostId::generate());
        assert_ne!(BlockId::generate(), BlockId::generate());
    }

    #[test]
    fn author_ids_carry_the_prefix() {
        let id = AuthorId::generate();
        assert!(id.0.starts_with("author_"));
    }

    #[test]
    fn display_matches_inner_string() {
        assert_eq!(PostId::from("abc").to_string(), "abc");
        assert_eq!(AuthorId::from("author_ce_1").to_string(), "author_ce_1");
    }
}
