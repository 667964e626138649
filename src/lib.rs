//! # threadpocket
//!
//! Save social threads and rich-text articles as Markdown documents.
//!
//! The library fetches a post by id (through an external fetcher),
//! converts it into a single Markdown document with front-matter, and
//! saves, lists, and deletes those documents in a local directory.
//! Articles carry a block-based rich-text structure which is converted
//! block by block; plain threads are concatenated with separators.
//!
//! ## Quick Start
//!
//! ```no_run
//! use threadpocket::{FetchConfig, ThreadPocket};
//!
//! fn main() -> threadpocket::Result<()> {
//!     let tp = ThreadPocket::new("./threads", FetchConfig::new());
//!
//!     let outcome = tp.save_url("https://x.com/alice/status/1234567890123456789")?;
//!     println!("saved {} ({} posts)", outcome.filename, outcome.tweet_count);
//!
//!     for thread in tp.list()? {
//!         println!("{} by {}", thread.filename, thread.meta.author);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Rich-text conversion**: headings, quotes, lists, inline styles,
//!   and embedded media resolved through the document entity map
//! - **Front-matter headers**: stable field order, parseable back into
//!   typed metadata
//! - **Lenient core**: malformed content falls back to plain text,
//!   dangling media references are dropped, out-of-range style spans are
//!   clamped
//! - **Atomic saves**: documents are renamed into place, never observed
//!   half-written

pub mod convert;
pub mod error;
pub mod fetch;
pub mod model;
pub mod render;
pub mod store;

// Re-export commonly used types
pub use convert::{apply_inline_styles, content_state_to_markdown, render_block, resolve_media};
pub use error::{Error, Result};
pub use fetch::{extract_tweet_id, BirdFetcher, FetchConfig, TweetFetcher};
pub use model::{
    Article, Author, BlockType, ContentBlock, ContentState, DocKind, Entity, EntityRange,
    InlineStyle, MediaItem, SaveOutcome, SavedThread, StyleRange, ThreadMeta, Tweet,
};
pub use render::{derive_filename, format_date, parse_frontmatter, render_document};
pub use store::ThreadStore;

use chrono::{SecondsFormat, Utc};
use log::info;
use model::filter_thread;
use std::path::PathBuf;

/// High-level entry point tying the fetcher, converter, and store
/// together.
pub struct ThreadPocket {
    store: ThreadStore,
    fetcher: Box<dyn TweetFetcher>,
}

impl ThreadPocket {
    /// Create a pipeline saving into `dir`, fetching via the external
    /// `bird` process with the given config.
    pub fn new(dir: impl Into<PathBuf>, config: FetchConfig) -> Self {
        Self {
            store: ThreadStore::new(dir),
            fetcher: Box::new(BirdFetcher::new(config)),
        }
    }

    /// Create a pipeline with a custom fetcher.
    pub fn with_fetcher(dir: impl Into<PathBuf>, fetcher: Box<dyn TweetFetcher>) -> Self {
        Self {
            store: ThreadStore::new(dir),
            fetcher,
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &ThreadStore {
        &self.store
    }

    /// Fetch the post behind `url`, render it, and save the document.
    ///
    /// Articles are saved from the single post; everything else fetches
    /// the full thread and drops replies from other accounts.
    pub fn save_url(&self, url: &str) -> Result<SaveOutcome> {
        let id = extract_tweet_id(url).ok_or_else(|| Error::InvalidUrl(url.to_string()))?;

        let mut single = self
            .fetcher
            .fetch_tweet(id)?
            .ok_or_else(|| Error::TweetNotFound(id.to_string()))?;
        if single.id.is_empty() {
            single.id = id.to_string();
        }

        let tweets = if single.is_article() {
            vec![single]
        } else {
            let thread = filter_thread(self.fetcher.fetch_thread(id)?);
            if thread.is_empty() {
                vec![single]
            } else {
                thread
            }
        };

        let saved_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let (markdown, meta) = render_document(&tweets, &saved_at);

        let first = &tweets[0];
        let filename = derive_filename(&format_date(&first.created_at), first.username(), id);
        self.store.save(&filename, &markdown)?;

        info!(
            "saved {} as {} ({} posts)",
            meta.url,
            filename,
            tweets.len()
        );

        Ok(SaveOutcome {
            success: true,
            filename,
            author: first.username().to_string(),
            author_name: first.author_name().to_string(),
            tweet_count: tweets.len(),
        })
    }

    /// List saved documents, newest first.
    pub fn list(&self) -> Result<Vec<SavedThread>> {
        self.store.list()
    }

    /// Delete a saved document by filename.
    pub fn delete(&self, filename: &str) -> Result<()> {
        self.store.delete(filename)
    }
}
