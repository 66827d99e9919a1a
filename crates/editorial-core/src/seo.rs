//! SEO metadata and the editorial readiness checklist.

use serde::{Deserialize, Serialize};

/// Per-post SEO metadata. Everything defaults; empty strings mean unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Seo {
    pub meta_title: String,
    pub meta_description: String,
    pub focus_keyword: String,
    pub canonical_url: String,
    pub og_image: String,
    pub no_index: bool,
    pub geo_summary: String,
    pub entity_mentions: Vec<String>,
}

/// Outcome of the SEO checklist for one post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeoReport {
    /// Meta title is 30 to 60 characters.
    pub meta_title_ok: bool,
    /// Meta description is 80 to 160 characters.
    pub meta_description_ok: bool,
    /// The focus keyword appears in the meta title (case-insensitive).
    pub keyword_in_title: bool,
    /// Excerpt is longer than 30 characters.
    pub has_excerpt: bool,
    /// At least one tag is set.
    pub has_tags: bool,
}

impl SeoReport {
    /// Runs the checklist against a post's metadata.
    pub fn audit(seo: &Seo, excerpt: &str, tags: &[String]) -> Self {
        let title_len = seo.meta_title.chars().count();
        let description_len = seo.meta_description.chars().count();
        let keyword_in_title = !seo.focus_keyword.is_empty()
            && seo
                .meta_title
                .to_lowercase()
                .contains(&seo.focus_keyword.to_lowercase());
        SeoReport {
            meta_title_ok: (30..=60).contains(&title_len),
            meta_description_ok: (80..=160).contains(&description_len),
            keyword_in_title,
            has_excerpt: excerpt.chars().count() > 30,
            has_tags: !tags.is_empty(),
        }
    }

    /// Checklist lines in display order.
    pub fn checks(&self) -> [(&'static str, bool); 5] {
        [
            ("meta title is 30-60 characters", self.meta_title_ok),
            ("meta description is 80-160 characters", self.meta_description_ok),
            ("focus keyword appears in the meta title", self.keyword_in_title),
            ("excerpt is longer than 30 characters", self.has_excerpt),
            ("at least one tag", self.has_tags),
        ]
    }

    pub fn passed(&self) -> usize {
        self.checks().iter().filter(|(_, ok)| *ok).count()
    }

    pub fn total(&self) -> usize {
        self.checks().len()
    }

    pub fn all_pass(&self) -> bool {
        self.checks().iter().all(|(_, ok)| *ok)
    }
}
