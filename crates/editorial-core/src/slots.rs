//! The curated slot board: fixed navigation positions pointing at posts.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::id::PostId;

/// The four fixed navigation positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKey {
    News,
    News2,
    Announcement,
    Impact,
}

impl SlotKey {
    /// Every slot in canonical board order.
    pub const ALL: [SlotKey; 4] = [
        SlotKey::News,
        SlotKey::News2,
        SlotKey::Announcement,
        SlotKey::Impact,
    ];

    /// The stored map key for this slot.
    pub fn as_str(self) -> &'static str {
        match self {
            SlotKey::News => "news",
            SlotKey::News2 => "news2",
            SlotKey::Announcement => "announcement",
            SlotKey::Impact => "impact",
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SlotKey {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "news" => Ok(SlotKey::News),
            "news2" => Ok(SlotKey::News2),
            "announcement" => Ok(SlotKey::Announcement),
            "impact" => Ok(SlotKey::Impact),
            _ => Err(format!(
                "unknown slot '{}', expected news/news2/announcement/impact",
                raw
            )),
        }
    }
}

/// The slot board. Insertion-ordered so the stored JSON keeps the
/// canonical key order; all four keys are always present and unfilled
/// slots hold `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Slots(IndexMap<SlotKey, Option<PostId>>);

impl Default for Slots {
    fn default() -> Self {
        let mut board = IndexMap::new();
        for key in SlotKey::ALL {
            board.insert(key, None);
        }
        Slots(board)
    }
}

impl Slots {
    pub fn new() -> Self {
        Slots::default()
    }

    /// Post assigned to `key`, if any.
    pub fn get(&self, key: SlotKey) -> Option<&PostId> {
        self.0.get(&key).and_then(|assignment| assignment.as_ref())
    }

    /// Assigns or clears a slot. The target id is not validated.
    pub fn set(&mut self, key: SlotKey, post: Option<PostId>) {
        self.0.insert(key, post);
    }

    /// Empties every slot pointing at `post`.
    pub fn clear_post(&mut self, post: &PostId) {
        for assignment in self.0.values_mut() {
            if assignment.as_ref() == Some(post) {
                *assignment = None;
            }
        }
    }

    /// The board in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotKey, Option<&PostId>)> + '_ {
        self.0.iter().map(|(key, assignment)| (*key, assignment.as_ref()))
    }
}

// Stored boards can miss keys (older documents) or carry keys that no
// longer exist; loading starts from the canonical board and folds in
// whatever still parses, dropping the rest.
impl<'de> Deserialize<'de> for Slots {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, Option<PostId>>::deserialize(deserializer)?;
        let mut board = Slots::default();
        for (key, assignment) in raw {
            if let Ok(key) = key.parse::<SlotKey>() {
                board.0.insert(key, assignment);
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_board_has_all_keys_unset() {
        let board = Slots::default();
        assert_eq!(board.iter().count(), 4);
        for key in SlotKey::ALL {
            assert!(board.get(key).is_none());
        }
    }

    #[test]
    fn serializes_in_canonical_order() {
        let mut board = Slots::default();
        board.set(SlotKey::Impact, Some(PostId("3".to_string())));
        let text = serde_json::to_string(&board).unwrap();
        assert_eq!(text, r#"{"news":null,"news2":null,"announcement":null,"impact":"3"}"#);
    }

    #[test]
    fn partial_and_unknown_keys_normalize_on_load() {
        let board: Slots =
            serde_json::from_value(json!({"announcement": "2", "retired_slot": "9"})).unwrap();
        assert_eq!(board.iter().count(), 4);
        assert_eq!(board.get(SlotKey::Announcement), Some(&PostId("2".to_string())));
        assert!(board.get(SlotKey::News).is_none());
    }

    #[test]
    fn clear_post_empties_every_match() {
        let mut board = Slots::default();
        let id = PostId("7".to_string());
        board.set(SlotKey::News, Some(id.clone()));
        board.set(SlotKey::News2, Some(id.clone()));
        board.set(SlotKey::Impact, Some(PostId("3".to_string())));
        board.clear_post(&id);
        assert!(board.get(SlotKey::News).is_none());
        assert!(board.get(SlotKey::News2).is_none());
        assert_eq!(board.get(SlotKey::Impact), Some(&PostId("3".to_string())));
    }

    #[test]
    fn slot_names_round_trip_through_from_str() {
        for key in SlotKey::ALL {
            assert_eq!(key.as_str().parse::<SlotKey>(), Ok(key));
        }
        assert!("sidebar".parse::<SlotKey>().is_err());
    }
}
