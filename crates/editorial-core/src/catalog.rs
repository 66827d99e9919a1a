//! The in-memory content catalog.
//!
//! All reads and mutations go through [`Catalog`] methods so derived
//! fields and cross-references stay consistent: slugs follow titles,
//! `read_time` follows content, slots never survive the post they point
//! at, and authors are reassigned atomically on deletion.

use chrono::Utc;

use crate::author::{Author, AuthorDraft, AuthorPatch};
use crate::error::CatalogError;
use crate::id::{AuthorId, PostId};
use crate::post::{Post, PostDraft, PostPatch, PostStatus, PostType};
use crate::readtime::ReadTime;
use crate::slots::{SlotKey, Slots};
use crate::slug::slugify;

/// The full editorial collection: posts (newest first), the author
/// roster, and the slot board.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    posts: Vec<Post>,
    authors: Vec<Author>,
    slots: Slots,
}

impl Catalog {
    /// Empty collection.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Assembles a catalog from already-loaded parts.
    pub fn from_parts(posts: Vec<Post>, authors: Vec<Author>, slots: Slots) -> Self {
        Catalog {
            posts,
            authors,
            slots,
        }
    }

    /// Splits the catalog back into parts for persistence.
    pub fn into_parts(self) -> (Vec<Post>, Vec<Author>, Slots) {
        (self.posts, self.authors, self.slots)
    }

    // ------------------------------------------------------------------
    // Read-only access
    // ------------------------------------------------------------------

    /// Every post, newest first, regardless of status.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// The author roster, oldest first.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    /// Looks a post up by id, any status.
    pub fn post_by_id(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|post| &post.id == id)
    }

    /// Looks an active post up by slug. Slugs are not unique by
    /// construction; the first match wins.
    pub fn post_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts
            .iter()
            .find(|post| post.is_active() && post.slug == slug)
    }

    /// Active posts of one section, stored order.
    pub fn posts_by_type(&self, kind: PostType) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|post| post.is_active() && post.kind == kind)
            .collect()
    }

    pub fn author_by_id(&self, id: &AuthorId) -> Option<&Author> {
        self.authors.iter().find(|author| &author.id == id)
    }

    /// Permalink resolution: id match first, then slug, any status.
    pub fn find_post(&self, key: &str) -> Option<&Post> {
        self.posts
            .iter()
            .find(|post| post.id.0 == key)
            .or_else(|| self.posts.iter().find(|post| post.slug == key))
    }

    /// Active posts of the same section as `id`, excluding the post
    /// itself, stored order, capped at `limit`. Empty when `id` is
    /// unknown.
    pub fn related_posts(&self, id: &PostId, limit: usize) -> Vec<&Post> {
        let current = match self.post_by_id(id) {
            Some(post) => post,
            None => return Vec::new(),
        };
        let kind = current.kind;
        self.posts
            .iter()
            .filter(|post| post.is_active() && &post.id != id && post.kind == kind)
            .take(limit)
            .collect()
    }

    /// Resolves a slot to its post, only when the target exists and is
    /// active. Dangling and inactive targets read as unset.
    pub fn slot_post(&self, key: SlotKey) -> Option<&Post> {
        let id = self.slots.get(key)?;
        self.post_by_id(id).filter(|post| post.is_active())
    }

    // ------------------------------------------------------------------
    // Post mutations
    // ------------------------------------------------------------------

    /// Creates a post from a draft and prepends it, keeping the
    /// collection newest first.
    ///
    /// The slug derives from the title; when derivation comes up empty a
    /// fresh generated id stands in, so every post has a routable slug.
    /// Unset draft fields take their documented defaults. Returns a clone
    /// of the stored record.
    pub fn create_post(&mut self, draft: PostDraft) -> Post {
        let id = PostId::generate();
        let now = Utc::now();
        let slug = match draft.slug.filter(|slug| !slug.is_empty()) {
            Some(explicit) => explicit,
            None => {
                let derived = slugify(&draft.title);
                if derived.is_empty() {
                    PostId::generate().0
                } else {
                    derived
                }
            }
        };
        let author = match draft.author {
            Some(author) => author,
            None => self
                .authors
                .first()
                .map(|author| author.id.clone())
                .unwrap_or_default(),
        };
        let category = draft
            .category
            .unwrap_or_else(|| draft.kind.default_category().to_string());

        let mut post = Post {
            id,
            slug,
            kind: draft.kind,
            category,
            title: draft.title,
            excerpt: draft.excerpt,
            tags: draft.tags,
            author,
            date: draft.date.unwrap_or(now),
            updated_at: Some(now),
            cover_image: draft.cover_image,
            cover_caption: draft.cover_caption,
            content: draft.content,
            status: draft.status.unwrap_or_default(),
            read_time: ReadTime::default(),
            seo: draft.seo,
            image: String::new(),
            description: String::new(),
        };
        post.normalize();
        self.posts.insert(0, post.clone());
        #[cfg(debug_assertions)]
        self.assert_consistency();
        post
    }

    /// Applies a partial update and renormalizes.
    ///
    /// The slug regenerates from a changed title unless the patch carries
    /// its own slug; a derivation that comes up empty keeps the old slug.
    pub fn update_post(&mut self, id: &PostId, patch: PostPatch) -> Result<Post, CatalogError> {
        let post = match self.posts.iter_mut().find(|post| &post.id == id) {
            Some(post) => post,
            None => return Err(CatalogError::PostNotFound { id: id.clone() }),
        };

        let explicit_slug = patch.slug.as_deref().map_or(false, |slug| !slug.is_empty());
        let new_title = patch.title.clone();
        let old_title = post.title.clone();

        patch.apply_to(post);

        if !explicit_slug {
            if let Some(title) = new_title {
                if title != old_title {
                    let derived = slugify(&title);
                    if !derived.is_empty() {
                        post.slug = derived;
                    }
                }
            }
        }

        post.updated_at = Some(Utc::now());
        post.normalize();
        Ok(post.clone())
    }

    /// Removes a post and clears every slot pointing at it. Unknown ids
    /// are a no-op; deletion is idempotent.
    pub fn delete_post(&mut self, id: &PostId) -> bool {
        let before = self.posts.len();
        self.posts.retain(|post| &post.id != id);
        if self.posts.len() == before {
            return false;
        }
        self.slots.clear_post(id);
        #[cfg(debug_assertions)]
        self.assert_consistency();
        true
    }

    /// Flips a post between `active` and `inactive`, stamping
    /// `updated_at`. A `draft` is returned unchanged; publishing a draft
    /// takes an explicit status update.
    pub fn toggle_post_status(&mut self, id: &PostId) -> Result<Post, CatalogError> {
        let post = match self.posts.iter_mut().find(|post| &post.id == id) {
            Some(post) => post,
            None => return Err(CatalogError::PostNotFound { id: id.clone() }),
        };
        match post.status {
            PostStatus::Active => post.status = PostStatus::Inactive,
            PostStatus::Inactive => post.status = PostStatus::Active,
            PostStatus::Draft => return Ok(post.clone()),
        }
        post.updated_at = Some(Utc::now());
        Ok(post.clone())
    }

    /// Points a slot at a post, or clears it. The target is not
    /// validated; readers tolerate dangling ids.
    pub fn set_slot(&mut self, key: SlotKey, post: Option<PostId>) {
        self.slots.set(key, post);
    }

    // ------------------------------------------------------------------
    // Author mutations
    // ------------------------------------------------------------------

    /// Adds an author to the end of the roster.
    pub fn add_author(&mut self, draft: AuthorDraft) -> Author {
        let author = Author {
            id: AuthorId::generate(),
            name: draft.name,
            role: draft.role,
            bio: draft.bio,
            avatar: draft.avatar,
            created_at: Utc::now(),
        };
        self.authors.push(author.clone());
        #[cfg(debug_assertions)]
        self.assert_consistency();
        author
    }

    pub fn update_author(
        &mut self,
        id: &AuthorId,
        patch: AuthorPatch,
    ) -> Result<Author, CatalogError> {
        let author = match self.authors.iter_mut().find(|author| &author.id == id) {
            Some(author) => author,
            None => return Err(CatalogError::AuthorNotFound { id: id.clone() }),
        };
        patch.apply_to(author);
        Ok(author.clone())
    }

    /// Deletes an author and reassigns their posts to the first remaining
    /// author, as one atomic step. Refused while only one author exists,
    /// whatever id was asked for; unknown ids are `Ok(false)`.
    pub fn delete_author(&mut self, id: &AuthorId) -> Result<bool, CatalogError> {
        if self.authors.len() <= 1 {
            return Err(CatalogError::LastAuthor);
        }
        if !self.authors.iter().any(|author| &author.id == id) {
            return Ok(false);
        }
        // first author of the post-deletion roster
        let heir = match self.authors.iter().find(|author| &author.id != id) {
            Some(author) => author.id.clone(),
            None => return Err(CatalogError::LastAuthor),
        };
        self.authors.retain(|author| &author.id != id);
        for post in &mut self.posts {
            if &post.author == id {
                post.author = heir.clone();
            }
        }
        #[cfg(debug_assertions)]
        self.assert_consistency();
        Ok(true)
    }

    /// Id uniqueness, checked after membership-changing mutations in
    /// debug builds.
    #[cfg(debug_assertions)]
    fn assert_consistency(&self) {
        use std::collections::HashSet;

        let mut post_ids = HashSet::new();
        for post in &self.posts {
            assert!(post_ids.insert(&post.id), "duplicate post id: {}", post.id);
        }
        let mut author_ids = HashSet::new();
        for author in &self.authors {
            assert!(
                author_ids.insert(&author.id),
                "duplicate author id: {}",
                author.id
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use crate::seed;

    fn two_author_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_author(AuthorDraft::new("First"));
        catalog.add_author(AuthorDraft::new("Second"));
        catalog
    }

    #[test]
    fn create_derives_slug_and_prepends() {
        let mut catalog = two_author_catalog();
        let older = catalog.create_post(PostDraft::new("Older Post", PostType::News));
        let post = catalog.create_post(PostDraft::new(
            "Blockchain Integration in Supply Chain",
            PostType::News,
        ));
        assert_eq!(post.slug, "blockchain-integration-in-supply-chain");
        assert_eq!(catalog.posts()[0].id, post.id);
        assert_eq!(catalog.posts()[1].id, older.id);
    }

    #[test]
    fn create_falls_back_to_generated_slug() {
        let mut catalog = two_author_catalog();
        let a = catalog.create_post(PostDraft::new("¡¿?!", PostType::News));
        let b = catalog.create_post(PostDraft::new("¡¿?!", PostType::News));
        assert!(!a.slug.is_empty());
        assert!(!b.slug.is_empty());
        assert_ne!(a.slug, b.slug);
    }

    #[test]
    fn create_applies_defaults() {
        let mut catalog = two_author_catalog();
        let first_author = catalog.authors()[0].id.clone();
        let post = catalog.create_post(PostDraft::new("Untitled Launch", PostType::Announcement));
        assert_eq!(post.status, PostStatus::Active);
        assert_eq!(post.author, first_author);
        assert_eq!(post.category, "Estructura Organizativa");
        assert!(post.updated_at.is_some());
        assert_eq!(post.read_time, ReadTime(1));
    }

    #[test]
    fn create_honors_explicit_slug_and_draft_status() {
        let mut catalog = two_author_catalog();
        let mut draft = PostDraft::new("Launch Notes", PostType::News);
        draft.slug = Some("custom-permalink".to_string());
        draft.status = Some(PostStatus::Draft);
        let post = catalog.create_post(draft);
        assert_eq!(post.slug, "custom-permalink");
        assert_eq!(post.status, PostStatus::Draft);
    }

    #[test]
    fn create_syncs_legacy_mirrors() {
        let mut catalog = two_author_catalog();
        let mut draft = PostDraft::new("Mirrored", PostType::News);
        draft.excerpt = "the summary".to_string();
        draft.cover_image = "cover.jpg".to_string();
        let post = catalog.create_post(draft);
        assert_eq!(post.image, "cover.jpg");
        assert_eq!(post.description, "the summary");
    }

    #[test]
    fn update_regenerates_slug_only_when_title_changes() {
        let mut catalog = two_author_catalog();
        let post = catalog.create_post(PostDraft::new("First Title", PostType::News));

        let untouched = catalog
            .update_post(
                &post.id,
                PostPatch {
                    excerpt: Some("new excerpt".to_string()),
                    ..PostPatch::default()
                },
            )
            .unwrap();
        assert_eq!(untouched.slug, "first-title");

        let retitled = catalog
            .update_post(
                &post.id,
                PostPatch {
                    title: Some("Second Title".to_string()),
                    ..PostPatch::default()
                },
            )
            .unwrap();
        assert_eq!(retitled.slug, "second-title");
    }

    #[test]
    fn explicit_patch_slug_beats_regeneration() {
        let mut catalog = two_author_catalog();
        let post = catalog.create_post(PostDraft::new("First Title", PostType::News));
        let updated = catalog
            .update_post(
                &post.id,
                PostPatch {
                    title: Some("Second Title".to_string()),
                    slug: Some("pinned-slug".to_string()),
                    ..PostPatch::default()
                },
            )
            .unwrap();
        assert_eq!(updated.slug, "pinned-slug");
        assert_eq!(updated.title, "Second Title");
    }

    #[test]
    fn update_recomputes_read_time_from_merged_content() {
        let mut catalog = two_author_catalog();
        let post = catalog.create_post(PostDraft::new("Body Test", PostType::News));
        let text = vec!["word"; 250].join(" ");
        let updated = catalog
            .update_post(
                &post.id,
                PostPatch {
                    content: Some(vec![Block::paragraph(text)]),
                    ..PostPatch::default()
                },
            )
            .unwrap();
        assert_eq!(updated.read_time, ReadTime(2));
    }

    #[test]
    fn update_missing_post_is_a_typed_error() {
        let mut catalog = two_author_catalog();
        let missing = PostId("nope".to_string());
        let err = catalog.update_post(&missing, PostPatch::default()).unwrap_err();
        assert_eq!(err, CatalogError::PostNotFound { id: missing });
        assert!(catalog.posts().is_empty());
    }

    #[test]
    fn delete_is_idempotent_and_clears_slots() {
        let mut catalog = two_author_catalog();
        let post = catalog.create_post(PostDraft::new("Featured", PostType::News));
        catalog.set_slot(SlotKey::News, Some(post.id.clone()));
        catalog.set_slot(SlotKey::News2, Some(post.id.clone()));

        assert!(catalog.delete_post(&post.id));
        assert!(catalog.slots().get(SlotKey::News).is_none());
        assert!(catalog.slots().get(SlotKey::News2).is_none());

        // second delete observes the same end state
        assert!(!catalog.delete_post(&post.id));
        assert!(catalog.post_by_id(&post.id).is_none());
    }

    #[test]
    fn toggle_flips_active_and_inactive_only() {
        let mut catalog = two_author_catalog();
        let post = catalog.create_post(PostDraft::new("Toggle Me", PostType::News));

        let off = catalog.toggle_post_status(&post.id).unwrap();
        assert_eq!(off.status, PostStatus::Inactive);
        let on = catalog.toggle_post_status(&post.id).unwrap();
        assert_eq!(on.status, PostStatus::Active);

        let mut draft = PostDraft::new("Still Cooking", PostType::News);
        draft.status = Some(PostStatus::Draft);
        let unpublished = catalog.create_post(draft);
        let after = catalog.toggle_post_status(&unpublished.id).unwrap();
        assert_eq!(after.status, PostStatus::Draft);
        assert_eq!(after.updated_at, unpublished.updated_at);
    }

    #[test]
    fn posts_by_type_returns_active_only_in_stored_order() {
        let mut catalog = two_author_catalog();
        let visible_old = catalog.create_post(PostDraft::new("Old News", PostType::News));
        let mut hidden = PostDraft::new("Hidden News", PostType::News);
        hidden.status = Some(PostStatus::Inactive);
        catalog.create_post(hidden);
        let mut pending = PostDraft::new("Pending News", PostType::News);
        pending.status = Some(PostStatus::Draft);
        catalog.create_post(pending);
        let visible_new = catalog.create_post(PostDraft::new("Fresh News", PostType::News));
        catalog.create_post(PostDraft::new("Partnership", PostType::Announcement));

        let listed = catalog.posts_by_type(PostType::News);
        let ids: Vec<&PostId> = listed.iter().map(|post| &post.id).collect();
        assert_eq!(ids, vec![&visible_new.id, &visible_old.id]);
    }

    #[test]
    fn slug_lookup_skips_non_active_posts() {
        let mut catalog = two_author_catalog();
        let mut draft = PostDraft::new("Quiet Launch", PostType::News);
        draft.status = Some(PostStatus::Inactive);
        let post = catalog.create_post(draft);
        assert!(catalog.post_by_slug(&post.slug).is_none());
        // direct permalink resolution still reaches it
        assert!(catalog.find_post(&post.slug).is_some());
    }

    #[test]
    fn find_post_prefers_id_over_slug() {
        let mut catalog = two_author_catalog();
        let by_title = catalog.create_post(PostDraft::new("Shared Key", PostType::News));
        let mut ambiguous = PostDraft::new("Other Post", PostType::News);
        ambiguous.slug = Some(by_title.id.0.clone());
        let by_id = catalog.create_post(ambiguous);
        // the key equals one post's id and another post's slug
        let found = catalog.find_post(&by_title.id.0).unwrap();
        assert_eq!(found.id, by_title.id);
        assert_ne!(found.id, by_id.id);
    }

    #[test]
    fn related_posts_filters_and_caps() {
        let mut catalog = two_author_catalog();
        let current = catalog.create_post(PostDraft::new("Current", PostType::News));
        for i in 0..4 {
            catalog.create_post(PostDraft::new(format!("News {}", i), PostType::News));
        }
        let mut inactive = PostDraft::new("Inactive News", PostType::News);
        inactive.status = Some(PostStatus::Inactive);
        catalog.create_post(inactive);
        catalog.create_post(PostDraft::new("Impact", PostType::ImpactStudy));

        let related = catalog.related_posts(&current.id, 3);
        assert_eq!(related.len(), 3);
        for post in &related {
            assert_eq!(post.kind, PostType::News);
            assert!(post.is_active());
            assert_ne!(post.id, current.id);
        }

        assert!(catalog.related_posts(&PostId("missing".to_string()), 3).is_empty());
    }

    #[test]
    fn slot_resolution_hides_dangling_and_inactive_targets() {
        let mut catalog = two_author_catalog();
        let visible = catalog.create_post(PostDraft::new("Visible", PostType::News));
        catalog.set_slot(SlotKey::News, Some(visible.id.clone()));
        assert_eq!(catalog.slot_post(SlotKey::News).unwrap().id, visible.id);

        catalog.toggle_post_status(&visible.id).unwrap();
        assert!(catalog.slot_post(SlotKey::News).is_none());

        catalog.set_slot(SlotKey::Impact, Some(PostId("gone".to_string())));
        assert!(catalog.slot_post(SlotKey::Impact).is_none());
        assert!(catalog.slot_post(SlotKey::Announcement).is_none());
    }

    #[test]
    fn deleting_an_author_reassigns_their_posts() {
        let mut catalog = two_author_catalog();
        let first = catalog.authors()[0].id.clone();
        let second = catalog.authors()[1].id.clone();
        let mut draft = PostDraft::new("By Second", PostType::News);
        draft.author = Some(second.clone());
        catalog.create_post(draft);

        assert_eq!(catalog.delete_author(&second), Ok(true));
        assert_eq!(catalog.authors().len(), 1);
        assert_eq!(catalog.authors()[0].id, first);
        for post in catalog.posts() {
            assert_eq!(post.author, first);
        }
    }

    #[test]
    fn last_author_is_protected() {
        let mut catalog = Catalog::new();
        let only = catalog.add_author(AuthorDraft::new("Solo"));
        assert_eq!(catalog.delete_author(&only.id), Err(CatalogError::LastAuthor));
        assert_eq!(catalog.authors().len(), 1);

        // refused even for ids that do not exist
        let missing = AuthorId("ghost".to_string());
        assert_eq!(catalog.delete_author(&missing), Err(CatalogError::LastAuthor));
    }

    #[test]
    fn deleting_an_unknown_author_reports_false() {
        let mut catalog = two_author_catalog();
        let missing = AuthorId("ghost".to_string());
        assert_eq!(catalog.delete_author(&missing), Ok(false));
        assert_eq!(catalog.authors().len(), 2);
    }

    #[test]
    fn seed_collection_queries_work_end_to_end() {
        let catalog = seed::catalog();
        assert_eq!(catalog.posts_by_type(PostType::News).len(), 4);
        let featured = catalog.slot_post(SlotKey::News).unwrap();
        assert_eq!(featured.id, PostId("1".to_string()));
        let related = catalog.related_posts(&featured.id, 3);
        assert_eq!(related.len(), 3);
    }
}
