//! Content blocks, the ordered units a post body is built from.
//!
//! The serialized shape matches the block editor's JSON: a flat object with
//! an `id`, a `type` tag, and the payload fields of that type.

use serde::{Deserialize, Serialize};

use crate::id::BlockId;

/// One unit of post content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(flatten)]
    pub kind: BlockKind,
}

/// Block payloads, discriminated by the stored `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    Paragraph {
        #[serde(default)]
        text: String,
    },
    Heading2 {
        #[serde(default)]
        text: String,
    },
    Heading3 {
        #[serde(default)]
        text: String,
    },
    Quote {
        #[serde(default)]
        text: String,
        #[serde(default)]
        attribution: String,
    },
    Image {
        #[serde(default)]
        src: String,
        #[serde(default)]
        caption: String,
        /// Layout hint written by the editor: `full`, `wide`, or `inset`.
        #[serde(default = "default_align")]
        align: String,
    },
    Callout {
        #[serde(default)]
        text: String,
        /// Editorial flavor of the callout box.
        #[serde(default = "default_variant")]
        variant: String,
    },
    List {
        #[serde(default)]
        items: Vec<String>,
        #[serde(default)]
        ordered: bool,
    },
    Divider,
}

fn default_align() -> String {
    "full".to_string()
}

fn default_variant() -> String {
    "insight".to_string()
}

impl Block {
    /// Builds a paragraph block with a fresh id.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block {
            id: BlockId::generate(),
            kind: BlockKind::Paragraph { text: text.into() },
        }
    }

    /// Words this block contributes to the reading-time estimate. Only
    /// textual fields count; image sources, captions, and dividers do not.
    pub fn word_count(&self) -> usize {
        match &self.kind {
            BlockKind::Paragraph { text }
            | BlockKind::Heading2 { text }
            | BlockKind::Heading3 { text } => words_in(text),
            BlockKind::Quote { text, attribution } => words_in(text) + words_in(attribution),
            BlockKind::Callout { text, .. } => words_in(text),
            BlockKind::List { items, .. } => items.iter().map(|item| words_in(item)).sum(),
            BlockKind::Image { .. } | BlockKind::Divider => 0,
        }
    }
}

fn words_in(text: &str) -> usize {
    text.split_whitespace().count()
}
