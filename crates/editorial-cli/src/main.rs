//! Editorial content engine CLI.
//!
//! Provides the `editorial` binary, the operator console and only writer
//! for the content collection: it lists, inspects, and edits posts,
//! manages the author roster, curates the navigation slots, and runs the
//! SEO checklist. State lives in a SQLite database by default or in a
//! JSON file with `--json`. Mutating subcommands require the shared
//! operator key.

use std::process;

use clap::{Parser, Subcommand};

use editorial_core::{
    AuthorDraft, AuthorId, AuthorPatch, Block, Post, PostDraft, PostId, PostPatch, PostStatus,
    PostType, SlotKey,
};
use editorial_storage::{ContentStore, JsonFileStore, SnapshotStore, SqliteStore};

/// Shared operator key, the same gate the dashboard uses. Supplied per
/// invocation with `--key` or `EDITORIAL_ADMIN_KEY`.
const ADMIN_KEY: &str = "CENTHROPY2026";

/// Editorial content engine console.
#[derive(Parser)]
#[command(name = "editorial", version, about = "Editorial content engine console")]
struct Cli {
    /// SQLite database path (default `editorial.db`, or EDITORIAL_DATA_PATH).
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<String>,

    /// Store state in a JSON file at this path instead of SQLite.
    #[arg(long, global = true, value_name = "PATH")]
    json: Option<String>,

    /// Operator key for mutating commands (or EDITORIAL_ADMIN_KEY).
    #[arg(long = "key", global = true, value_name = "KEY")]
    admin_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Inspect and edit posts.
    Post {
        #[command(subcommand)]
        command: PostCommands,
    },
    /// Manage the author roster.
    Author {
        #[command(subcommand)]
        command: AuthorCommands,
    },
    /// Curate the navigation slot board.
    Slot {
        #[command(subcommand)]
        command: SlotCommands,
    },
    /// Run the SEO checklist against a post.
    Seo {
        /// Post id or slug.
        key: String,
    },
    /// List the suggested category vocabulary.
    Categories {
        /// Limit to one section: news, announcement, or impact_study.
        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<String>,
    },
    /// Drop everything and restore the built-in starter collection.
    Reset {
        /// Confirm the reset.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum PostCommands {
    /// List posts, newest first. Active only unless --all.
    List {
        /// Limit to one section: news, announcement, or impact_study.
        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<String>,
        /// Include drafts and inactive posts.
        #[arg(long)]
        all: bool,
    },
    /// Show one post (by id or slug) with its related posts.
    Show {
        key: String,
    },
    /// Create a post.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long = "type", value_name = "TYPE")]
        kind: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value = "")]
        excerpt: String,
        /// Repeatable.
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
        /// Author id; defaults to the first author on the roster.
        #[arg(long)]
        author: Option<String>,
        /// Cover image URL.
        #[arg(long)]
        cover: Option<String>,
        /// Cover caption.
        #[arg(long)]
        caption: Option<String>,
        /// Explicit slug override; the default derives from the title.
        #[arg(long)]
        slug: Option<String>,
        /// Body as a single paragraph.
        #[arg(long, conflicts_with = "body")]
        text: Option<String>,
        /// Body as a JSON block-array file.
        #[arg(long, value_name = "FILE")]
        body: Option<String>,
        /// Create as a draft instead of publishing.
        #[arg(long)]
        draft: bool,
    },
    /// Update fields of a post.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        excerpt: Option<String>,
        /// Repeatable; replaces the whole tag list.
        #[arg(long = "tag", value_name = "TAG")]
        tags: Option<Vec<String>>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        cover: Option<String>,
        #[arg(long)]
        caption: Option<String>,
        /// active, draft, or inactive.
        #[arg(long)]
        status: Option<String>,
        /// Replace the body with a single paragraph.
        #[arg(long, conflicts_with = "body")]
        text: Option<String>,
        /// Replace the body from a JSON block-array file.
        #[arg(long, value_name = "FILE")]
        body: Option<String>,
    },
    /// Delete a post and clear it from every slot.
    Delete {
        id: String,
    },
    /// Flip a post between active and inactive.
    Toggle {
        id: String,
    },
}

#[derive(Subcommand)]
enum AuthorCommands {
    /// List the roster.
    List,
    /// Add an author.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        role: String,
        #[arg(long, default_value = "")]
        bio: String,
        #[arg(long)]
        avatar: Option<String>,
    },
    /// Update an author. An empty --avatar clears it.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
    },
    /// Delete an author; their posts move to the first remaining author.
    Delete {
        id: String,
    },
}

#[derive(Subcommand)]
enum SlotCommands {
    /// Show the board.
    Show,
    /// Point a slot at a post.
    Set {
        slot: String,
        post: String,
    },
    /// Empty a slot.
    Clear {
        slot: String,
    },
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    process::exit(run(cli));
}

/// Dispatches a parsed invocation.
///
/// Returns exit code: 0 = success, 1 = domain or storage error,
/// 2 = bad usage.
fn run(cli: Cli) -> i32 {
    let Cli {
        db,
        json,
        admin_key,
        command,
    } = cli;

    let backend: Box<dyn SnapshotStore> = if let Some(path) = json {
        Box::new(JsonFileStore::new(path))
    } else {
        let path = db
            .or_else(|| std::env::var("EDITORIAL_DATA_PATH").ok())
            .unwrap_or_else(|| "editorial.db".to_string());
        match SqliteStore::new(&path) {
            Ok(store) => Box::new(store),
            Err(e) => {
                eprintln!("Error: failed to open database '{}': {}", path, e);
                return 1;
            }
        }
    };

    let mut store = match ContentStore::open(backend) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let key = admin_key.as_deref();
    match command {
        Commands::Post { command } => run_post(&mut store, command, key),
        Commands::Author { command } => run_author(&mut store, command, key),
        Commands::Slot { command } => run_slot(&mut store, command, key),
        Commands::Seo { key: lookup } => run_seo(&store, &lookup),
        Commands::Categories { kind } => run_categories(kind.as_deref()),
        Commands::Reset { yes } => run_reset(&mut store, yes, key),
    }
}

// ----------------------------------------------------------------------
// Post commands
// ----------------------------------------------------------------------

fn run_post(store: &mut ContentStore, command: PostCommands, key: Option<&str>) -> i32 {
    match command {
        PostCommands::List { kind, all } => {
            let kind = match kind.as_deref().map(|raw| raw.parse::<PostType>()) {
                Some(Ok(kind)) => Some(kind),
                Some(Err(msg)) => {
                    eprintln!("Error: {}", msg);
                    return 2;
                }
                None => None,
            };
            let posts: Vec<&Post> = store
                .catalog()
                .posts()
                .iter()
                .filter(|post| all || post.is_active())
                .filter(|post| kind.map_or(true, |kind| post.kind == kind))
                .collect();
            for post in posts {
                println!(
                    "{:<38} {:<13} {:<9} {}",
                    post.id, post.kind, post.status, post.title
                );
            }
            0
        }
        PostCommands::Show { key: lookup } => {
            let post = match store.catalog().find_post(&lookup) {
                Some(post) => post,
                None => {
                    eprintln!("Error: no post matches '{}'", lookup);
                    return 1;
                }
            };
            let rendered = match serde_json::to_string_pretty(post) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return 1;
                }
            };
            println!("{}", rendered);
            let related = store.catalog().related_posts(&post.id, 3);
            if !related.is_empty() {
                println!();
                println!("related:");
                for related_post in related {
                    println!("  {:<38} {}", related_post.id, related_post.title);
                }
            }
            0
        }
        PostCommands::Add {
            title,
            kind,
            category,
            excerpt,
            tags,
            author,
            cover,
            caption,
            slug,
            text,
            body,
            draft,
        } => {
            if let Some(code) = require_key(key) {
                return code;
            }
            let kind = match kind.parse::<PostType>() {
                Ok(kind) => kind,
                Err(msg) => {
                    eprintln!("Error: {}", msg);
                    return 2;
                }
            };
            let content = match load_content(text, body) {
                Ok(content) => content,
                Err(msg) => {
                    eprintln!("Error: {}", msg);
                    return 2;
                }
            };
            let mut post_draft = PostDraft::new(title, kind);
            post_draft.category = category;
            post_draft.excerpt = excerpt;
            post_draft.tags = tags;
            post_draft.author = author.map(AuthorId);
            post_draft.cover_image = cover.unwrap_or_default();
            post_draft.cover_caption = caption.unwrap_or_default();
            post_draft.slug = slug;
            post_draft.content = content;
            if draft {
                post_draft.status = Some(PostStatus::Draft);
            }
            match store.create_post(post_draft) {
                Ok(post) => {
                    println!("created {} ({})", post.id, post.slug);
                    0
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
        PostCommands::Update {
            id,
            title,
            slug,
            kind,
            category,
            excerpt,
            tags,
            author,
            cover,
            caption,
            status,
            text,
            body,
        } => {
            if let Some(code) = require_key(key) {
                return code;
            }
            let kind = match kind.as_deref().map(|raw| raw.parse::<PostType>()) {
                Some(Ok(kind)) => Some(kind),
                Some(Err(msg)) => {
                    eprintln!("Error: {}", msg);
                    return 2;
                }
                None => None,
            };
            let status = match status.as_deref().map(|raw| raw.parse::<PostStatus>()) {
                Some(Ok(status)) => Some(status),
                Some(Err(msg)) => {
                    eprintln!("Error: {}", msg);
                    return 2;
                }
                None => None,
            };
            let content = match load_content_patch(text, body) {
                Ok(content) => content,
                Err(msg) => {
                    eprintln!("Error: {}", msg);
                    return 2;
                }
            };
            let patch = PostPatch {
                title,
                slug,
                kind,
                category,
                excerpt,
                tags,
                author: author.map(AuthorId),
                date: None,
                cover_image: cover,
                cover_caption: caption,
                content,
                status,
                seo: None,
            };
            match store.update_post(&PostId(id), patch) {
                Ok(post) => {
                    println!("updated {} ({})", post.id, post.slug);
                    0
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
        PostCommands::Delete { id } => {
            if let Some(code) = require_key(key) {
                return code;
            }
            match store.delete_post(&PostId(id.clone())) {
                Ok(true) => {
                    println!("deleted {}", id);
                    0
                }
                Ok(false) => {
                    println!("nothing to delete for {}", id);
                    0
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
        PostCommands::Toggle { id } => {
            if let Some(code) = require_key(key) {
                return code;
            }
            match store.toggle_post_status(&PostId(id)) {
                Ok(post) => {
                    println!("{} is now {}", post.id, post.status);
                    0
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
    }
}

// ----------------------------------------------------------------------
// Author commands
// ----------------------------------------------------------------------

fn run_author(store: &mut ContentStore, command: AuthorCommands, key: Option<&str>) -> i32 {
    match command {
        AuthorCommands::List => {
            for author in store.catalog().authors() {
                println!("{:<44} {:<28} {}", author.id, author.name, author.role);
            }
            0
        }
        AuthorCommands::Add {
            name,
            role,
            bio,
            avatar,
        } => {
            if let Some(code) = require_key(key) {
                return code;
            }
            let draft = AuthorDraft {
                name,
                role,
                bio,
                avatar,
            };
            match store.add_author(draft) {
                Ok(author) => {
                    println!("added {}", author.id);
                    0
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
        AuthorCommands::Update {
            id,
            name,
            role,
            bio,
            avatar,
        } => {
            if let Some(code) = require_key(key) {
                return code;
            }
            let patch = AuthorPatch {
                name,
                role,
                bio,
                avatar: avatar.map(|value| if value.is_empty() { None } else { Some(value) }),
            };
            match store.update_author(&AuthorId(id), patch) {
                Ok(author) => {
                    println!("updated {}", author.id);
                    0
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
        AuthorCommands::Delete { id } => {
            if let Some(code) = require_key(key) {
                return code;
            }
            match store.delete_author(&AuthorId(id.clone())) {
                Ok(true) => {
                    println!("deleted {}", id);
                    0
                }
                Ok(false) => {
                    println!("no author with id {}", id);
                    0
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
    }
}

// ----------------------------------------------------------------------
// Slot, SEO, categories, reset
// ----------------------------------------------------------------------

fn run_slot(store: &mut ContentStore, command: SlotCommands, key: Option<&str>) -> i32 {
    match command {
        SlotCommands::Show => {
            for (slot, assigned) in store.catalog().slots().iter() {
                match store.catalog().slot_post(slot) {
                    Some(post) => println!("{:<13} {} ({})", slot, post.title, post.id),
                    None => match assigned {
                        Some(id) => println!("{:<13} {} (unresolved)", slot, id),
                        None => println!("{:<13} empty", slot),
                    },
                }
            }
            0
        }
        SlotCommands::Set { slot, post } => {
            if let Some(code) = require_key(key) {
                return code;
            }
            let slot = match slot.parse::<SlotKey>() {
                Ok(slot) => slot,
                Err(msg) => {
                    eprintln!("Error: {}", msg);
                    return 2;
                }
            };
            match store.set_slot(slot, Some(PostId(post))) {
                Ok(()) => {
                    println!("{} set", slot);
                    0
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
        SlotCommands::Clear { slot } => {
            if let Some(code) = require_key(key) {
                return code;
            }
            let slot = match slot.parse::<SlotKey>() {
                Ok(slot) => slot,
                Err(msg) => {
                    eprintln!("Error: {}", msg);
                    return 2;
                }
            };
            match store.set_slot(slot, None) {
                Ok(()) => {
                    println!("{} cleared", slot);
                    0
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
    }
}

fn run_seo(store: &ContentStore, lookup: &str) -> i32 {
    let post = match store.catalog().find_post(lookup) {
        Some(post) => post,
        None => {
            eprintln!("Error: no post matches '{}'", lookup);
            return 1;
        }
    };
    let report = post.seo_audit();
    for (label, ok) in report.checks() {
        let mark = if ok { "pass" } else { "fail" };
        println!("[{}] {}", mark, label);
    }
    println!("{}/{} checks pass", report.passed(), report.total());
    0
}

fn run_categories(kind: Option<&str>) -> i32 {
    let kinds: Vec<PostType> = match kind {
        Some(raw) => match raw.parse::<PostType>() {
            Ok(kind) => vec![kind],
            Err(msg) => {
                eprintln!("Error: {}", msg);
                return 2;
            }
        },
        None => PostType::ALL.to_vec(),
    };
    for kind in kinds {
        println!("{}:", kind);
        for category in kind.suggested_categories() {
            println!("  {}", category);
        }
    }
    0
}

fn run_reset(store: &mut ContentStore, yes: bool, key: Option<&str>) -> i32 {
    if let Some(code) = require_key(key) {
        return code;
    }
    if !yes {
        eprintln!("Error: pass --yes to confirm dropping the current collection");
        return 2;
    }
    match store.reset() {
        Ok(()) => {
            println!("seed collection restored");
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

// ----------------------------------------------------------------------
// Helpers
// ----------------------------------------------------------------------

/// Checks the operator key for a mutating command. Returns the exit code
/// to bail with, or `None` to proceed.
fn require_key(provided: Option<&str>) -> Option<i32> {
    let supplied = match provided {
        Some(key) => key.to_string(),
        None => match std::env::var("EDITORIAL_ADMIN_KEY") {
            Ok(key) => key,
            Err(_) => {
                eprintln!("Error: operator key required (--key or EDITORIAL_ADMIN_KEY)");
                return Some(1);
            }
        },
    };
    if supplied == ADMIN_KEY {
        None
    } else {
        eprintln!("Error: invalid operator key");
        Some(1)
    }
}

/// Builds block content from either a plain --text paragraph or a JSON
/// block-array file.
fn load_content(text: Option<String>, body: Option<String>) -> Result<Vec<Block>, String> {
    match (text, body) {
        (Some(text), None) => Ok(vec![Block::paragraph(text)]),
        (None, Some(path)) => {
            let raw = std::fs::read_to_string(&path)
                .map_err(|e| format!("failed to read '{}': {}", path, e))?;
            serde_json::from_str(&raw).map_err(|e| format!("invalid block JSON in '{}': {}", path, e))
        }
        (None, None) => Ok(Vec::new()),
        (Some(_), Some(_)) => Err("--text and --body are mutually exclusive".to_string()),
    }
}

/// Like [`load_content`], but absent flags mean the body stays as is.
fn load_content_patch(
    text: Option<String>,
    body: Option<String>,
) -> Result<Option<Vec<Block>>, String> {
    match (text, body) {
        (None, None) => Ok(None),
        (text, body) => load_content(text, body).map(Some),
    }
}
