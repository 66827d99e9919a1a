//! Authors and their create/update inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::AuthorId;

/// A content author shown on post bylines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: AuthorId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Input for adding an author; `name` is the only required field.
#[derive(Debug, Clone, Default)]
pub struct AuthorDraft {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub avatar: Option<String>,
}

impl AuthorDraft {
    pub fn new(name: impl Into<String>) -> Self {
        AuthorDraft {
            name: name.into(),
            ..AuthorDraft::default()
        }
    }
}

/// Partial update for an author. `None` fields leave the stored value;
/// `avatar` distinguishes "leave it" (`None`) from "clear it"
/// (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct AuthorPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<Option<String>>,
}

impl AuthorPatch {
    /// Folds the set fields into `author`.
    pub(crate) fn apply_to(self, author: &mut Author) {
        if let Some(name) = self.name {
            author.name = name;
        }
        if let Some(role) = self.role {
            author.role = role;
        }
        if let Some(bio) = self.bio {
            author.bio = bio;
        }
        if let Some(avatar) = self.avatar {
            author.avatar = avatar;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_shape_uses_created_at_camel_case() {
        let author = Author {
            id: AuthorId("author_ce_1".to_string()),
            name: "Centhropy Engineering".to_string(),
            role: "Engineering Team".to_string(),
            bio: String::new(),
            avatar: None,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&author).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("createdAt"));
        assert!(object["avatar"].is_null());
    }

    #[test]
    fn minimal_record_deserializes_with_defaults() {
        let author: Author = serde_json::from_str(r#"{"id": "a1"}"#).unwrap();
        assert_eq!(author.id, AuthorId("a1".to_string()));
        assert!(author.name.is_empty());
        assert!(author.avatar.is_none());
    }

    #[test]
    fn patch_set_fields_win_and_unset_fields_keep_base() {
        let mut author: Author = serde_json::from_str(r#"{"id": "a1", "name": "Old"}"#).unwrap();
        author.avatar = Some("old.png".to_string());
        let patch = AuthorPatch {
            name: Some("New".to_string()),
            avatar: Some(None),
            ..AuthorPatch::default()
        };
        patch.apply_to(&mut author);
        assert_eq!(author.name, "New");
        assert!(author.avatar.is_none());
        assert!(author.role.is_empty());
    }
}
