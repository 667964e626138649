//! Saved-document types: the front-matter header, listing entries, and
//! the outcome returned to callers after a save.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rendering mode of a saved document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocKind {
    /// A sequence of plain-text posts joined by separators.
    #[default]
    Thread,
    /// A single rich-text post with structured blocks.
    Article,
}

impl DocKind {
    /// Front-matter value for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocKind::Thread => "thread",
            DocKind::Article => "article",
        }
    }

    /// Parse a front-matter value; anything but `"article"` is a thread.
    pub fn from_str_lossy(s: &str) -> Self {
        if s == "article" {
            DocKind::Article
        } else {
            DocKind::Thread
        }
    }
}

/// Header fields of a saved document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThreadMeta {
    /// Author handle, with the `@` prefix.
    pub author: String,

    /// Author display name.
    pub author_name: String,

    /// Source status id.
    pub tweet_id: String,

    /// Canonical source URL.
    pub url: String,

    /// Thread or article.
    #[serde(rename = "type")]
    pub kind: DocKind,

    /// Article title, when known.
    pub title: Option<String>,

    /// Cover image URL, when known.
    pub cover_image: Option<String>,

    /// Save timestamp, RFC 3339.
    pub saved_at: String,
}

impl ThreadMeta {
    /// Render the fixed-field front-matter block, `---` fences included,
    /// followed by a blank line.
    ///
    /// Field order is stable; optional fields are omitted entirely when
    /// absent.
    pub fn to_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];
        lines.push(format!("author: \"{}\"", self.author));
        lines.push(format!("author_name: \"{}\"", escape_quotes(&self.author_name)));
        lines.push(format!("tweet_id: \"{}\"", self.tweet_id));
        lines.push(format!("url: \"{}\"", self.url));
        lines.push(format!("type: \"{}\"", self.kind.as_str()));
        if let Some(ref title) = self.title {
            lines.push(format!("title: \"{}\"", escape_quotes(title)));
        }
        if let Some(ref cover) = self.cover_image {
            lines.push(format!("cover_image: \"{}\"", cover));
        }
        lines.push(format!("saved_at: \"{}\"", self.saved_at));
        lines.push("---".to_string());
        lines.push(String::new());
        lines.push(String::new());
        lines.join("\n")
    }

    /// Recover header fields from a parsed front-matter map.
    ///
    /// Missing fields become empty strings or `None`; never fails.
    pub fn from_fields(fields: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| fields.get(key).cloned().unwrap_or_default();
        Self {
            author: get("author"),
            author_name: get("author_name"),
            tweet_id: get("tweet_id"),
            url: get("url"),
            kind: DocKind::from_str_lossy(&get("type")),
            title: fields.get("title").cloned(),
            cover_image: fields.get("cover_image").cloned(),
            saved_at: get("saved_at"),
        }
    }
}

fn escape_quotes(s: &str) -> String {
    s.replace('"', "\\\"")
}

/// A saved document read back from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedThread {
    /// File name inside the store directory.
    pub filename: String,

    /// Parsed header fields.
    #[serde(flatten)]
    pub meta: ThreadMeta,

    /// Document body (everything after the front-matter).
    pub content: String,
}

/// Summary returned to the caller after a save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveOutcome {
    /// Always true on the success path.
    pub success: bool,

    /// Name of the written file.
    pub filename: String,

    /// Author handle, without the `@`.
    pub author: String,

    /// Author display name.
    #[serde(rename = "authorName")]
    pub author_name: String,

    /// Number of source items rendered.
    #[serde(rename = "tweetCount")]
    pub tweet_count: usize,
}
