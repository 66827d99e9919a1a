//! Reading-time estimation.
//!
//! Stored and displayed as the string `"N min read"`, computed from the
//! block content at 200 words per minute. The value is derived: every
//! mutating catalog operation recomputes it, so it can never drift from
//! the content it describes.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::block::Block;

/// Average reading speed underlying the estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Reading-time estimate in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReadTime(pub u32);

impl ReadTime {
    /// Estimates from a block sequence: total words at 200 wpm, rounded
    /// up, never below one minute.
    pub fn for_blocks(blocks: &[Block]) -> Self {
        let words: usize = blocks.iter().map(Block::word_count).sum();
        ReadTime(words.div_ceil(WORDS_PER_MINUTE).max(1) as u32)
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    /// Lenient parse of stored values like `"4 min read"`. Anything without
    /// a leading minute count reads as one minute.
    fn parse(raw: &str) -> Self {
        match raw.split_whitespace().next().and_then(|n| n.parse().ok()) {
            Some(minutes) => ReadTime(minutes),
            None => ReadTime(1), // fallback
        }
    }
}

impl Default for ReadTime {
    fn default() -> Self {
        ReadTime(1)
    }
}

impl fmt::Display for ReadTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min read", self.0)
    }
}

impl Serialize for ReadTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReadTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ReadTime::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn floors_at_one_minute() {
        assert_eq!(ReadTime::for_blocks(&[]), ReadTime(1));
        assert_eq!(ReadTime::for_blocks(&[Block::paragraph("just a few words")]), ReadTime(1));
    }

    #[test]
    fn two_hundred_fifty_words_is_two_minutes() {
        let text = vec!["word"; 250].join(" ");
        assert_eq!(ReadTime::for_blocks(&[Block::paragraph(text)]), ReadTime(2));
    }

    #[test]
    fn exact_multiple_does_not_round_up() {
        let text = vec!["word"; 400].join(" ");
        assert_eq!(ReadTime::for_blocks(&[Block::paragraph(text)]), ReadTime(2));
    }

    #[test]
    fn serializes_as_display_string() {
        let json = serde_json::to_string(&ReadTime(4)).unwrap();
        assert_eq!(json, "\"4 min read\"");
    }

    #[test]
    fn lenient_parse_of_stored_values() {
        let stored: ReadTime = serde_json::from_str("\"6 min read\"").unwrap();
        assert_eq!(stored, ReadTime(6));
        let junk: ReadTime = serde_json::from_str("\"quick skim\"").unwrap();
        assert_eq!(junk, ReadTime(1));
    }

    proptest! {
        #[test]
        fn monotone_in_word_count(a in 0usize..1500, b in 0usize..1500) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let short = [Block::paragraph(vec!["w"; lo].join(" "))];
            let long = [Block::paragraph(vec!["w"; hi].join(" "))];
            prop_assert!(ReadTime::for_blocks(&short) <= ReadTime::for_blocks(&long));
        }

        #[test]
        fn never_below_one_minute(words in 0usize..3000) {
            let blocks = [Block::paragraph(vec!["w"; words].join(" "))];
            prop_assert!(ReadTime::for_blocks(&blocks) >= ReadTime(1));
        }
    }
}
