//! The built-in starter collection.
//!
//! This is the content the engine falls back to when nothing has been
//! stored yet, or when the stored document cannot be read: two authors,
//! twelve posts across the three sections, and the default slot board.
//! The records are literals, not migrated legacy data, and deliberately
//! keep their hand-written reading times and empty block bodies.

use chrono::{Duration, Utc};

use crate::author::Author;
use crate::catalog::Catalog;
use crate::id::{AuthorId, PostId};
use crate::post::{Post, PostStatus, PostType};
use crate::readtime::ReadTime;
use crate::seo::Seo;
use crate::slots::{SlotKey, Slots};

/// Author that migrated legacy records are attributed to.
pub const PRIMARY_AUTHOR_ID: &str = "author_ce_1";
/// Second built-in author.
pub const SECONDARY_AUTHOR_ID: &str = "author_ce_2";

/// The full starter catalog.
pub fn catalog() -> Catalog {
    Catalog::from_parts(posts(), authors(), slots())
}

/// The two built-in authors.
pub fn authors() -> Vec<Author> {
    vec![
        Author {
            id: AuthorId(PRIMARY_AUTHOR_ID.to_string()),
            name: "Centhropy Engineering".to_string(),
            role: "Engineering Team".to_string(),
            bio: "El equipo de ingeniería de Centhropy, especialistas en data intelligence, \
                  AI y arquitecturas de datos globales."
                .to_string(),
            avatar: None,
            created_at: Utc::now(),
        },
        Author {
            id: AuthorId(SECONDARY_AUTHOR_ID.to_string()),
            name: "Centhropy Strategy".to_string(),
            role: "Strategic Intelligence".to_string(),
            bio: "División de inteligencia estratégica de Centhropy. Análisis, visión de \
                  mercado y liderazgo de pensamiento."
                .to_string(),
            avatar: None,
            created_at: Utc::now(),
        },
    ]
}

/// The default slot board: one featured post per navigation surface.
pub fn slots() -> Slots {
    let mut board = Slots::default();
    board.set(SlotKey::News, Some(PostId("1".to_string())));
    board.set(SlotKey::News2, Some(PostId("4".to_string())));
    board.set(SlotKey::Announcement, Some(PostId("2".to_string())));
    board.set(SlotKey::Impact, Some(PostId("3".to_string())));
    board
}

/// The twelve starter posts, newest first within each section.
pub fn posts() -> Vec<Post> {
    vec![
        seed_post(
            "1",
            "blockchain-integration-supply-chain",
            PostType::News,
            "Blog",
            "Blockchain Integration in Supply Chain",
            "Exploring how blockchain is revolutionizing transparency in global logistics.",
            &["Blockchain", "Supply Chain", "Datos"],
            PRIMARY_AUTHOR_ID,
            3,
            "photo-1565891741441-64926e441838",
            0,
        ),
        seed_post(
            "4",
            "ai-governance-ethics-2026",
            PostType::News,
            "Liderazgo de pensamiento",
            "AI Governance and Ethics in 2026",
            "New frameworks for responsible AI deployment are being adopted worldwide.",
            &["AI", "Governance", "Ética"],
            SECONDARY_AUTHOR_ID,
            3,
            "photo-1573164713988-8665fc963095",
            1,
        ),
        seed_post(
            "5",
            "future-of-autonomous-data",
            PostType::News,
            "Tecnología",
            "The Future of Autonomous Data Intelligence",
            "How self-correcting data pipelines are changing the landscape of enterprise AI.",
            &["Data", "AI", "Automation"],
            PRIMARY_AUTHOR_ID,
            5,
            "photo-1558494949-ef010cbdcc31",
            2,
        ),
        seed_post(
            "6",
            "unify-agent-capabilities",
            PostType::News,
            "Producto",
            "Deep Dive: Unify Agent 3.0 Capabilities",
            "An inside look at the cognitive architecture of our most advanced data assistant.",
            &["Unify", "Agent", "Product"],
            PRIMARY_AUTHOR_ID,
            4,
            "photo-1522071820081-009f0129c71c",
            3,
        ),
        seed_post(
            "2",
            "new-strategic-partnership-tech-giants",
            PostType::Announcement,
            "Alianzas Estratégicas",
            "New Strategic Partnership with Tech Giants",
            "Centhropy announces a major collaboration to scale AI infrastructure.",
            &["Alianza", "AI", "Estrategia"],
            SECONDARY_AUTHOR_ID,
            2,
            "photo-1519389950473-47ba0277781c",
            0,
        ),
        seed_post(
            "7",
            "expansion-into-european-market",
            PostType::Announcement,
            "Estructura Organizativa",
            "Expansion into the European Market",
            "Centhropy opens new data center hubs in Berlin and Madrid.",
            &["Expansión", "Global", "Infraestructura"],
            PRIMARY_AUTHOR_ID,
            2,
            "photo-1486406146926-c627a92ad1ab",
            5,
        ),
        seed_post(
            "8",
            "sustainability-report-2025",
            PostType::Announcement,
            "Gobierno Corporativo",
            "2025 Sustainability & Impact Report",
            "Our commitment to carbon-neutral data processing and ethical computing.",
            &["Sustainability", "ESG", "Ethics"],
            SECONDARY_AUTHOR_ID,
            3,
            "photo-1473341304170-971dccb5ac1e",
            7,
        ),
        seed_post(
            "9",
            "appointment-new-cto",
            PostType::Announcement,
            "Nombramientos",
            "Centhropy Appoints New Chief Technology Officer",
            "Renowned AI researcher joins our leadership team to drive innovation.",
            &["Leadership", "CTO", "Talent"],
            SECONDARY_AUTHOR_ID,
            2,
            "photo-1507679799987-c73779587ccf",
            10,
        ),
        seed_post(
            "3",
            "retail-transformation-case-study",
            PostType::ImpactStudy,
            "Retail Intelligence",
            "Retail Transformation Case Study",
            "How our data solutions increased efficiency by 40% for a leading retailer.",
            &["Retail", "Case Study", "Data"],
            PRIMARY_AUTHOR_ID,
            4,
            "photo-1441986300917-64674bd600d8",
            0,
        ),
        seed_post(
            "10",
            "autonomous-logistics-optimization",
            PostType::ImpactStudy,
            "Logística",
            "Autonomous Logistics Optimization",
            "Reducing transit times by 25% using real-time predictive analytics.",
            &["Logistics", "Predictive", "Impact"],
            PRIMARY_AUTHOR_ID,
            5,
            "photo-1586528116311-ad8dd3c8310d",
            14,
        ),
        seed_post(
            "11",
            "fintech-security-scaling",
            PostType::ImpactStudy,
            "Fintech",
            "Scaling Security for Next-Gen Fintech",
            "Zero-trust architecture for high-frequency financial data processing.",
            &["Security", "Fintech", "Scale"],
            PRIMARY_AUTHOR_ID,
            6,
            "photo-1563986768609-322da13575f3",
            18,
        ),
        seed_post(
            "12",
            "predictive-maintenance-industrial",
            PostType::ImpactStudy,
            "Industrial",
            "Predictive Maintenance in Heavy Industry",
            "Preventing downtime worth millions through loT data integration.",
            &["IoT", "Industry", "Analytics"],
            PRIMARY_AUTHOR_ID,
            4,
            "photo-1581091226825-a6a2a5aee158",
            21,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn seed_post(
    id: &str,
    slug: &str,
    kind: PostType,
    category: &str,
    title: &str,
    excerpt: &str,
    tags: &[&str],
    author: &str,
    minutes: u32,
    cover: &str,
    days_ago: i64,
) -> Post {
    let cover_url = unsplash(cover);
    Post {
        id: PostId(id.to_string()),
        slug: slug.to_string(),
        kind,
        category: category.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        author: AuthorId(author.to_string()),
        date: Utc::now() - Duration::days(days_ago),
        updated_at: None,
        cover_image: cover_url.clone(),
        cover_caption: String::new(),
        content: Vec::new(),
        status: PostStatus::Active,
        read_time: ReadTime(minutes),
        seo: Seo::default(),
        image: cover_url,
        description: excerpt.to_string(),
    }
}

fn unsplash(photo: &str) -> String {
    format!(
        "https://images.unsplash.com/{}?auto=format&fit=crop&w=800&q=80",
        photo
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_counts() {
        let catalog = catalog();
        assert_eq!(catalog.posts().len(), 12);
        assert_eq!(catalog.authors().len(), 2);
        assert_eq!(catalog.slots().iter().count(), 4);
    }

    #[test]
    fn four_posts_per_section() {
        let catalog = catalog();
        for kind in PostType::ALL {
            assert_eq!(catalog.posts_by_type(kind).len(), 4, "section {}", kind);
        }
    }

    #[test]
    fn slots_point_at_seed_posts() {
        let catalog = catalog();
        for (key, expected) in [
            (SlotKey::News, "1"),
            (SlotKey::News2, "4"),
            (SlotKey::Announcement, "2"),
            (SlotKey::Impact, "3"),
        ] {
            let post = catalog.slot_post(key).unwrap();
            assert_eq!(post.id, PostId(expected.to_string()));
        }
    }

    #[test]
    fn every_record_is_self_consistent() {
        let catalog = catalog();
        for post in catalog.posts() {
            assert!(!post.slug.is_empty());
            assert_eq!(post.image, post.cover_image);
            assert_eq!(post.description, post.excerpt);
            assert!(post.is_active());
            assert!(catalog.author_by_id(&post.author).is_some());
        }
    }

    #[test]
    fn hand_written_reading_times_survive() {
        let catalog = catalog();
        let featured = catalog.post_by_id(&PostId("1".to_string())).unwrap();
        assert_eq!(featured.read_time, ReadTime(3));
        let longest = catalog.post_by_id(&PostId("11".to_string())).unwrap();
        assert_eq!(longest.read_time, ReadTime(6));
    }
}
