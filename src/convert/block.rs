//! Block-to-Markdown rendering.

use super::media::resolve_media;
use super::styles::apply_inline_styles;
use crate::model::{Article, BlockType, ContentBlock};
use std::collections::HashMap;

/// Append the Markdown fragment for one block.
///
/// Headings and quotes end with a blank line; list items render
/// contiguously with a single newline. Atomic blocks resolve their first
/// entity key through `media_urls` and emit an image reference, or
/// nothing when the reference dangles. Blank unstyled blocks contribute a
/// single blank line to preserve paragraph spacing from the source.
pub fn render_block(block: &ContentBlock, media_urls: &HashMap<String, String>, out: &mut String) {
    match block.block_type {
        BlockType::HeaderOne => {
            out.push_str("# ");
            out.push_str(&block.text);
            out.push_str("\n\n");
        }
        BlockType::HeaderTwo => {
            out.push_str("## ");
            out.push_str(&block.text);
            out.push_str("\n\n");
        }
        BlockType::HeaderThree => {
            out.push_str("### ");
            out.push_str(&block.text);
            out.push_str("\n\n");
        }
        BlockType::Blockquote => {
            out.push_str("> ");
            out.push_str(&block.text);
            out.push_str("\n\n");
        }
        BlockType::UnorderedListItem => {
            out.push_str("- ");
            out.push_str(&block.text);
            out.push('\n');
        }
        BlockType::OrderedListItem => {
            // The marker is a constant "1." for every item. The source
            // format does not carry item numbers and the original output
            // never incremented them.
            out.push_str("1. ");
            out.push_str(&block.text);
            out.push('\n');
        }
        BlockType::Atomic => {
            let url = block
                .first_entity_key()
                .and_then(|key| media_urls.get(key));
            if let Some(url) = url {
                out.push('\n');
                out.push_str("![](");
                out.push_str(url);
                out.push_str(")\n\n");
            }
        }
        BlockType::Unstyled => {
            if block.text.trim().is_empty() {
                out.push('\n');
            } else {
                out.push_str(&apply_inline_styles(
                    &block.text,
                    &block.inline_style_ranges,
                ));
                out.push_str("\n\n");
            }
        }
    }
}

/// Convert an article's rich-text content to a Markdown body.
///
/// Returns `None` when the article has no `content_state` or no blocks,
/// so the caller can fall back to the post's plain text instead of
/// treating malformed input as an error.
pub fn content_state_to_markdown(article: &Article) -> Option<String> {
    let state = article.content_state.as_ref()?;
    if state.blocks.is_empty() {
        return None;
    }

    let media_urls = resolve_media(&article.media_entities, &state.entity_map);

    let mut out = String::new();
    for block in &state.blocks {
        render_block(block, &media_urls, &mut out);
    }
    Some(out)
}
