//! Source items crossing the fetch boundary.

use super::entity::Article;
use serde::{Deserialize, Serialize};

/// Author of a source item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Author {
    /// Handle without the `@`.
    #[serde(default)]
    pub username: String,

    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// One source item as returned by the external fetcher: a post with its
/// author, timestamp, and an optional rich-text article.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    /// Status id.
    #[serde(default)]
    pub id: String,

    /// Plain text of the post.
    #[serde(default)]
    pub text: String,

    /// Id of the posting account; used for reply filtering.
    #[serde(default)]
    pub author_id: String,

    /// Source timestamp, e.g. `"Wed Oct 10 20:19:24 +0000 2018"`.
    #[serde(default)]
    pub created_at: String,

    /// Author details.
    #[serde(default)]
    pub author: Option<Author>,

    /// Rich-text article, if the post carries one.
    #[serde(default)]
    pub article: Option<Article>,
}

impl Tweet {
    /// Author handle, or `"unknown"` when absent.
    pub fn username(&self) -> &str {
        self.author
            .as_ref()
            .map(|a| a.username.as_str())
            .filter(|u| !u.is_empty())
            .unwrap_or("unknown")
    }

    /// Author display name, or `"Unknown"` when absent.
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .map(|a| a.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("Unknown")
    }

    /// Whether this post carries a rich-text article.
    pub fn is_article(&self) -> bool {
        self.article.is_some()
    }
}

/// Keep only the items posted by the thread's own author.
///
/// A fetched thread interleaves replies from other accounts; everything
/// not sharing the first item's `author_id` is dropped.
pub fn filter_thread(tweets: Vec<Tweet>) -> Vec<Tweet> {
    let author_id = match tweets.first() {
        Some(first) => first.author_id.clone(),
        None => return tweets,
    };
    tweets
        .into_iter()
        .filter(|t| t.author_id == author_id)
        .collect()
}
