//! Loading stored documents of any historical shape.
//!
//! Three layouts exist in the wild:
//!
//! 1. the current versioned envelope (`schemaVersion: 2`),
//! 2. an object of `posts`/`authors`/`slots` collections with no version
//!    field (version 1),
//! 3. the original bare JSON array of post records.
//!
//! Post records inside pre-envelope documents may predate the block
//! editor; those are upgraded field by field. The sole upgrade trigger is
//! the shape of `content`: a record whose `content` is already an array
//! passes through untouched, whatever the rest of it looks like.

use serde_json::{json, Map, Value};

use editorial_core::{seed, slugify, Author, BlockId, Post, PostType, Slots};

use crate::envelope::{Snapshot, SCHEMA_VERSION};
use crate::error::StorageError;

/// Reading time stamped on upgraded legacy records. The recompute-on-write
/// invariant only applies to engine mutations, not to this one-time
/// upgrade.
const LEGACY_READ_TIME: &str = "3 min read";

/// Parses stored JSON text into a current-schema snapshot.
pub fn decode_snapshot(text: &str) -> Result<Snapshot, StorageError> {
    let value: Value = serde_json::from_str(text)?;
    snapshot_from_value(value)
}

/// Normalizes any historical document shape to the current snapshot.
pub fn snapshot_from_value(value: Value) -> Result<Snapshot, StorageError> {
    match value {
        // the original engine persisted a naked post array; authors and
        // slots did not exist yet and come from the seeds
        Value::Array(records) => Ok(Snapshot {
            schema_version: SCHEMA_VERSION,
            posts: upgrade_posts(records)?,
            authors: seed::authors(),
            slots: seed::slots(),
        }),
        Value::Object(doc) => match doc.get("schemaVersion").and_then(Value::as_u64) {
            Some(version) if version == u64::from(SCHEMA_VERSION) => {
                Ok(serde_json::from_value(Value::Object(doc))?)
            }
            Some(1) | None => upgrade_v1(doc),
            Some(version) => Err(StorageError::UnsupportedSchema(
                u32::try_from(version).unwrap_or(u32::MAX),
            )),
        },
        _ => Err(StorageError::Migration(
            "stored document is neither an object nor an array".to_string(),
        )),
    }
}

/// Upgrades the unversioned object layout: each collection that is
/// present is taken (posts through the per-record upgrade), each absent
/// one falls back to its seed.
fn upgrade_v1(mut doc: Map<String, Value>) -> Result<Snapshot, StorageError> {
    let posts = match doc.remove("posts") {
        Some(Value::Array(records)) => upgrade_posts(records)?,
        Some(_) => {
            return Err(StorageError::Migration(
                "posts collection is not an array".to_string(),
            ))
        }
        None => seed::posts(),
    };
    let authors = match doc.remove("authors") {
        Some(value) => serde_json::from_value::<Vec<Author>>(value)?,
        None => seed::authors(),
    };
    let slots = match doc.remove("slots") {
        Some(value) => serde_json::from_value::<Slots>(value)?,
        None => seed::slots(),
    };
    Ok(Snapshot {
        schema_version: SCHEMA_VERSION,
        posts,
        authors,
        slots,
    })
}

fn upgrade_posts(records: Vec<Value>) -> Result<Vec<Post>, StorageError> {
    let mut posts = Vec::with_capacity(records.len());
    for record in records {
        posts.push(serde_json::from_value(upgrade_record(record))?);
    }
    Ok(posts)
}

/// Upgrades one pre-block-editor record to the current shape.
///
/// Legacy records carry `title`/`description`/`image` and little else.
/// The upgrade derives a slug from the title (record id when the
/// derivation is empty), maps a category from the section, attributes the
/// record to the primary built-in author, stamps the fixed legacy reading
/// time, copies `image`/`description` into `coverImage`/`excerpt`,
/// synthesizes a single paragraph block from the description, and seeds
/// the SEO fields from the legacy ones. The legacy `image` and
/// `description` keys are kept verbatim for consumers that still read
/// them.
fn upgrade_record(record: Value) -> Value {
    let obj = match record {
        Value::Object(map) => {
            if map.get("content").map_or(false, Value::is_array) {
                return Value::Object(map);
            }
            map
        }
        other => return other,
    };

    let id = match obj.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => String::new(),
    };
    let title = text_field(&obj, "title");
    let description = text_field(&obj, "description");
    let image = text_field(&obj, "image");
    let kind = text_field(&obj, "type")
        .parse::<PostType>()
        .unwrap_or(PostType::News); // fallback

    let derived = slugify(&title);
    let slug = if derived.is_empty() { id.clone() } else { derived };
    let content = if description.is_empty() {
        json!([])
    } else {
        json!([{
            "id": BlockId::generate(),
            "type": "paragraph",
            "text": description,
        }])
    };

    let mut out = obj;
    out.insert("id".to_string(), Value::String(id));
    out.insert("slug".to_string(), Value::String(slug));
    out.insert("type".to_string(), json!(kind));
    out.insert(
        "category".to_string(),
        Value::String(kind.default_category().to_string()),
    );
    out.insert("tags".to_string(), json!([]));
    out.insert(
        "authorId".to_string(),
        Value::String(seed::PRIMARY_AUTHOR_ID.to_string()),
    );
    out.insert(
        "readTime".to_string(),
        Value::String(LEGACY_READ_TIME.to_string()),
    );
    out.insert("coverImage".to_string(), Value::String(image.clone()));
    out.insert("excerpt".to_string(), Value::String(description.clone()));
    out.insert("content".to_string(), content);
    out.insert(
        "seo".to_string(),
        json!({
            "metaTitle": title,
            "metaDescription": description,
            "ogImage": image,
        }),
    );
    out.insert("image".to_string(), Value::String(image));
    out.insert("description".to_string(), Value::String(description));
    Value::Object(out)
}

fn text_field(map: &Map<String, Value>, key: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
