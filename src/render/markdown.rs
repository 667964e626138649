//! Markdown document assembly.
//!
//! Builds the complete saved document: front-matter header, title and
//! attribution lines, separator, then the body. Articles go through the
//! block converter; threads concatenate each post's plain text with
//! separators and never touch the rich-text path.

use crate::convert::content_state_to_markdown;
use crate::model::{DocKind, ThreadMeta, Tweet};
use chrono::Utc;
use regex::Regex;

/// Assemble the full Markdown document for a fetched thread or article.
///
/// `tweets` must already be reply-filtered; the first item supplies the
/// author, timestamp, and (for articles) the rich-text content. Returns
/// the document string together with its header fields.
pub fn render_document(tweets: &[Tweet], saved_at: &str) -> (String, ThreadMeta) {
    let first = match tweets.first() {
        Some(first) => first,
        None => return (String::new(), ThreadMeta::default()),
    };

    let author = first.username().to_string();
    let author_name = first.author_name().to_string();
    let tweet_id = first.id.clone();
    let url = format!("https://x.com/{}/status/{}", author, tweet_id);
    let date = format_date(&first.created_at);

    let article = first.article.as_ref();
    let title = article.and_then(|a| a.title.clone());
    let cover_image = article.and_then(|a| a.cover_image.clone());

    let meta = ThreadMeta {
        author: format!("@{}", author),
        author_name: author_name.clone(),
        tweet_id,
        url: url.clone(),
        kind: if article.is_some() {
            DocKind::Article
        } else {
            DocKind::Thread
        },
        title: title.clone(),
        cover_image: cover_image.clone(),
        saved_at: saved_at.to_string(),
    };

    let mut md = meta.to_frontmatter();

    match article {
        Some(article) => {
            if let Some(ref title) = title {
                md.push_str(&format!("# {}\n\n", title));
            }
            md.push_str(&attribution(&author_name, &date, &url));
            if let Some(ref cover) = cover_image {
                md.push_str(&format!("![]({})\n\n", cover));
            }
            md.push_str("---\n\n");
            match content_state_to_markdown(article) {
                Some(body) => md.push_str(&body),
                // Malformed or absent content state: fall back to the
                // post's plain text.
                None => {
                    md.push_str(&first.text);
                    md.push('\n');
                }
            }
        }
        None => {
            md.push_str(&format!("# Thread by @{}\n\n", author));
            md.push_str(&attribution(&author_name, &date, &url));
            md.push_str("---\n\n");
            for tweet in tweets {
                md.push_str(&tweet.text);
                md.push_str("\n\n---\n\n");
            }
        }
    }

    (md, meta)
}

fn attribution(author_name: &str, date: &str, url: &str) -> String {
    format!("*{}* · [{}]({})\n\n", author_name, date, url)
}

/// Extract a `{year}-{month-abbrev}-{day}` date from a source timestamp
/// such as `"Wed Oct 10 20:19:24 +0000 2018"` (→ `"2018-Oct-10"`).
///
/// Timestamps that do not match fall back to the current UTC date in
/// `%Y-%m-%d` form, so filename derivation never fails.
pub fn format_date(created_at: &str) -> String {
    let re = Regex::new(r"(\w{3}) (\d+) .* (\d{4})").unwrap();
    match re.captures(created_at) {
        Some(caps) => format!("{}-{}-{}", &caps[3], &caps[1], &caps[2]),
        None => Utc::now().format("%Y-%m-%d").to_string(),
    }
}

/// Derive the stable filename for a saved document.
///
/// The triple `(date, author, id)` is the joint identity of a saved
/// document; identical inputs always produce the identical name.
pub fn derive_filename(date: &str, author: &str, tweet_id: &str) -> String {
    format!("{}_{}_{}.md", date, author, tweet_id)
}
