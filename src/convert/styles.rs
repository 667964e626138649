//! Inline style application.
//!
//! Splices Markdown delimiters into a line of raw text according to
//! offset-based style ranges. Ranges are applied from the rightmost
//! offset first, so earlier insertions never shift the positions still
//! needed by ranges yet to be applied. Overlapping ranges therefore
//! produce the literal splice result; the output is textually valid but
//! the delimiter nesting for partially overlapping spans is unspecified.

use crate::model::{InlineStyle, StyleRange};

/// Apply inline style ranges to a single line of text.
///
/// Offsets are character positions. Out-of-range spans are clamped to
/// the text bounds, empty spans are skipped, and styles other than bold
/// and italic pass through unchanged. Applying zero ranges returns the
/// text as-is.
pub fn apply_inline_styles(text: &str, ranges: &[StyleRange]) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }

    let mut sorted: Vec<&StyleRange> = ranges.iter().collect();
    sorted.sort_by(|a, b| b.offset.cmp(&a.offset));

    // Work on chars so clamped indices always fall on a boundary.
    let mut chars: Vec<char> = text.chars().collect();
    for range in sorted {
        let delim = match range.style {
            InlineStyle::Bold => "**",
            InlineStyle::Italic => "*",
            InlineStyle::Other => continue,
        };

        let start = range.offset.min(chars.len());
        let end = range.offset.saturating_add(range.length).min(chars.len());
        if start == end {
            continue;
        }

        let mut spliced = Vec::with_capacity(chars.len() + 2 * delim.len());
        spliced.extend_from_slice(&chars[..start]);
        spliced.extend(delim.chars());
        spliced.extend_from_slice(&chars[start..end]);
        spliced.extend(delim.chars());
        spliced.extend_from_slice(&chars[end..]);
        chars = spliced;
    }

    chars.into_iter().collect()
}
