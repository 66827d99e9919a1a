//! Posts: the central editorial record and its lifecycle inputs.
//!
//! Stored field names keep the original document spelling (`type`,
//! `authorId`, `coverImage`, `readTime`) so existing data loads unchanged.
//! Every field except `id` and `type` carries a default, which is what lets
//! records written by older engine versions deserialize at all.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::block::Block;
use crate::id::{AuthorId, PostId};
use crate::readtime::ReadTime;
use crate::seo::{Seo, SeoReport};

/// Editorial sections a post can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    News,
    Announcement,
    ImpactStudy,
}

impl PostType {
    pub const ALL: [PostType; 3] = [
        PostType::News,
        PostType::Announcement,
        PostType::ImpactStudy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PostType::News => "news",
            PostType::Announcement => "announcement",
            PostType::ImpactStudy => "impact_study",
        }
    }

    /// Editorial vocabulary suggested for this section. Categories stay
    /// free-form; these only seed the picker.
    pub fn suggested_categories(self) -> &'static [&'static str] {
        match self {
            PostType::News => &[
                "Blog",
                "Comunicados de Prensa",
                "Cartas del CEO",
                "Liderazgo de Pensamiento",
                "Cobertura Mediática",
            ],
            PostType::Announcement => &[
                "Estructura Organizativa",
                "Expansión Global",
                "Alianzas Estratégicas",
                "ESG & Impacto",
                "Informes Trimestrales",
            ],
            PostType::ImpactStudy => &[
                "Retail Intelligence",
                "Supply Chain",
                "Predictive Analysis",
                "Global Infrastructure",
                "Data Sovereignty",
            ],
        }
    }

    /// Category stamped on records that never carried one.
    pub fn default_category(self) -> &'static str {
        match self {
            PostType::News => "Blog",
            PostType::Announcement => "Estructura Organizativa",
            PostType::ImpactStudy => "Retail Intelligence",
        }
    }
}

impl std::fmt::Display for PostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for PostType {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "news" => Ok(PostType::News),
            "announcement" => Ok(PostType::Announcement),
            "impact_study" | "impact-study" => Ok(PostType::ImpactStudy),
            _ => Err(format!(
                "unknown post type '{}', expected news/announcement/impact_study",
                raw
            )),
        }
    }
}

/// Publication lifecycle state. Only `active` posts surface on public
/// queries; `draft` and `inactive` stay operator-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Active,
    Draft,
    Inactive,
}

impl PostStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PostStatus::Active => "active",
            PostStatus::Draft => "draft",
            PostStatus::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for PostStatus {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "active" => Ok(PostStatus::Active),
            "draft" => Ok(PostStatus::Draft),
            "inactive" => Ok(PostStatus::Inactive),
            _ => Err(format!(
                "unknown status '{}', expected active/draft/inactive",
                raw
            )),
        }
    }
}

/// A single editorial record.
///
/// `read_time` and the legacy `image`/`description` mirrors are derived;
/// [`Post::normalize`] recomputes them and every catalog mutation ends
/// with a normalize pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    #[serde(default)]
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: PostType,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "authorId", default)]
    pub author: AuthorId,
    #[serde(default = "Utc::now", deserialize_with = "deserialize_date")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub cover_caption: String,
    #[serde(default)]
    pub content: Vec<Block>,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub read_time: ReadTime,
    #[serde(default)]
    pub seo: Seo,
    /// Legacy mirror of `cover_image`, kept for consumers not yet migrated.
    #[serde(default)]
    pub image: String,
    /// Legacy mirror of `excerpt`.
    #[serde(default)]
    pub description: String,
}

impl Post {
    /// Recomputes every derived field: `read_time` from the block content
    /// and the legacy mirrors from `cover_image`/`excerpt`.
    pub fn normalize(&mut self) {
        self.read_time = ReadTime::for_blocks(&self.content);
        self.image = self.cover_image.clone();
        self.description = self.excerpt.clone();
    }

    pub fn is_active(&self) -> bool {
        self.status == PostStatus::Active
    }

    /// Runs the SEO checklist against this post.
    pub fn seo_audit(&self) -> SeoReport {
        SeoReport::audit(&self.seo, &self.excerpt, &self.tags)
    }
}

/// Input for creating a post; `title` and `kind` are the only required
/// fields.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub kind: PostType,
    /// Defaults to the section's first suggested category.
    pub category: Option<String>,
    pub excerpt: String,
    pub tags: Vec<String>,
    /// Defaults to the first author on the roster.
    pub author: Option<AuthorId>,
    pub date: Option<DateTime<Utc>>,
    pub cover_image: String,
    pub cover_caption: String,
    pub content: Vec<Block>,
    /// Defaults to `active`.
    pub status: Option<PostStatus>,
    /// Explicit slug override; empty means derive from the title.
    pub slug: Option<String>,
    pub seo: Seo,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, kind: PostType) -> Self {
        PostDraft {
            title: title.into(),
            kind,
            category: None,
            excerpt: String::new(),
            tags: Vec::new(),
            author: None,
            date: None,
            cover_image: String::new(),
            cover_caption: String::new(),
            content: Vec::new(),
            status: None,
            slug: None,
            seo: Seo::default(),
        }
    }
}

/// Partial update for a post. `None` fields leave the stored value.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    /// An explicit non-empty slug here beats regeneration from a changed
    /// title.
    pub slug: Option<String>,
    pub kind: Option<PostType>,
    pub category: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Option<Vec<String>>,
    pub author: Option<AuthorId>,
    pub date: Option<DateTime<Utc>>,
    pub cover_image: Option<String>,
    pub cover_caption: Option<String>,
    pub content: Option<Vec<Block>>,
    pub status: Option<PostStatus>,
    pub seo: Option<Seo>,
}

impl PostPatch {
    /// Folds the set fields into `post`. Slug regeneration from a title
    /// change is the caller's concern.
    pub(crate) fn apply_to(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(slug) = self.slug {
            if !slug.is_empty() {
                post.slug = slug;
            }
        }
        if let Some(kind) = self.kind {
            post.kind = kind;
        }
        if let Some(category) = self.category {
            post.category = category;
        }
        if let Some(excerpt) = self.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(tags) = self.tags {
            post.tags = tags;
        }
        if let Some(author) = self.author {
            post.author = author;
        }
        if let Some(date) = self.date {
            post.date = date;
        }
        if let Some(cover_image) = self.cover_image {
            post.cover_image = cover_image;
        }
        if let Some(cover_caption) = self.cover_caption {
            post.cover_caption = cover_caption;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(status) = self.status {
            post.status = status;
        }
        if let Some(seo) = self.seo {
            post.seo = seo;
        }
    }
}

/// Dates written by the engine are RFC 3339, but hand-entered legacy
/// records sometimes carry a bare `YYYY-MM-DD`; both parse.
fn deserialize_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    if let Ok(date) = raw.parse::<DateTime<Utc>>() {
        return Ok(date);
    }
    match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        Ok(day) => Ok(day.and_time(NaiveTime::MIN).and_utc()),
        Err(err) => Err(serde::de::Error::custom(err)),
    }
}
