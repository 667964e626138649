//! Front-matter parsing for saved documents.
//!
//! The inverse of document assembly: splits a saved document back into
//! header fields and body. Parsing is best-effort and never fails; a
//! document without the expected delimiter structure yields an empty
//! field set with the whole input as the body.

use regex::Regex;
use std::collections::BTreeMap;

/// Split a saved document into front-matter fields and body.
///
/// The header is a `---` line, `key: value` lines, a `---` line, then a
/// blank line before the body. Values may be wrapped in double quotes
/// (stripped); only the first `:` on a line separates key from value, so
/// URLs keep their colons. One leading blank line is stripped from the
/// body, making this a left inverse of the assembler's header format.
pub fn parse_frontmatter(input: &str) -> (BTreeMap<String, String>, &str) {
    let re = Regex::new(r"(?s)\A---\n(.*?)\n---\n(.*)\z").unwrap();

    let caps = match re.captures(input) {
        Some(caps) => caps,
        None => return (BTreeMap::new(), input),
    };

    let mut fields = BTreeMap::new();
    let header = caps.get(1).map_or("", |m| m.as_str());
    for line in header.lines() {
        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            let value = strip_quotes(value.trim());
            fields.insert(key.to_string(), value.to_string());
        }
    }

    let body = caps.get(2).map_or("", |m| m.as_str());
    let body = body.strip_prefix('\n').unwrap_or(body);
    (fields, body)
}

fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_frontmatter() {
        let doc = "---\nauthor: \"@alice\"\ntype: \"thread\"\n---\n\nBody text\n";
        let (fields, body) = parse_frontmatter(doc);
        assert_eq!(fields.get("author").map(String::as_str), Some("@alice"));
        assert_eq!(fields.get("type").map(String::as_str), Some("thread"));
        assert_eq!(body, "Body text\n");
    }

    #[test]
    fn test_missing_delimiters_returns_whole_input() {
        let doc = "just some markdown\n\nwith paragraphs";
        let (fields, body) = parse_frontmatter(doc);
        assert!(fields.is_empty());
        assert_eq!(body, doc);
    }

    #[test]
    fn test_colons_in_values_are_preserved() {
        let doc = "---\nurl: \"https://x.com/alice/status/1\"\n---\n\nbody";
        let (fields, _) = parse_frontmatter(doc);
        assert_eq!(
            fields.get("url").map(String::as_str),
            Some("https://x.com/alice/status/1")
        );
    }

    #[test]
    fn test_unquoted_values() {
        let doc = "---\ncount: 3\n---\n\nbody";
        let (fields, _) = parse_frontmatter(doc);
        assert_eq!(fields.get("count").map(String::as_str), Some("3"));
    }

    #[test]
    fn test_lines_without_colon_are_skipped() {
        let doc = "---\nauthor: \"@a\"\nnot a field line\n---\n\nbody";
        let (fields, _) = parse_frontmatter(doc);
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let (fields, body) = parse_frontmatter("");
        assert!(fields.is_empty());
        assert_eq!(body, "");
    }

    #[test]
    fn test_round_trip_with_assembler_header() {
        use crate::model::{DocKind, ThreadMeta};

        let meta = ThreadMeta {
            author: "@alice".to_string(),
            author_name: "Alice".to_string(),
            tweet_id: "123".to_string(),
            url: "https://x.com/alice/status/123".to_string(),
            kind: DocKind::Article,
            title: Some("A Title".to_string()),
            cover_image: None,
            saved_at: "2024-01-01T00:00:00Z".to_string(),
        };
        let doc = format!("{}# A Title\n\nbody\n", meta.to_frontmatter());

        let (fields, body) = parse_frontmatter(&doc);
        let recovered = ThreadMeta::from_fields(&fields);
        assert_eq!(recovered.author, meta.author);
        assert_eq!(recovered.author_name, meta.author_name);
        assert_eq!(recovered.tweet_id, meta.tweet_id);
        assert_eq!(recovered.url, meta.url);
        assert_eq!(recovered.kind, meta.kind);
        assert_eq!(recovered.title, meta.title);
        assert_eq!(recovered.saved_at, meta.saved_at);
        assert_eq!(body, "# A Title\n\nbody\n");
    }
}
