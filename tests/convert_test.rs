//! Integration tests for the block-to-Markdown conversion pipeline.

use std::collections::HashMap;

use threadpocket::{
    apply_inline_styles, content_state_to_markdown, render_block, resolve_media, Article,
    BlockType, ContentBlock, ContentState, Entity, InlineStyle, MediaItem, StyleRange,
};

fn render_one(block: &ContentBlock, media_urls: &HashMap<String, String>) -> String {
    let mut out = String::new();
    render_block(block, media_urls, &mut out);
    out
}

#[test]
fn heading_fragments_start_with_hashes_and_one_space() {
    let cases = [
        (BlockType::HeaderOne, "# "),
        (BlockType::HeaderTwo, "## "),
        (BlockType::HeaderThree, "### "),
    ];
    for (block_type, prefix) in cases {
        let fragment = render_one(&ContentBlock::new(block_type, "Heading"), &HashMap::new());
        assert!(
            fragment.starts_with(prefix),
            "{:?} should start with {:?}, got {:?}",
            block_type,
            prefix,
            fragment
        );
        assert!(!fragment.starts_with(&format!("{} ", prefix)));
    }
}

#[test]
fn zero_style_ranges_is_identity() {
    assert_eq!(apply_inline_styles("any text at all", &[]), "any text at all");
}

#[test]
fn bold_range_wraps_span() {
    let ranges = [StyleRange::new(0, 5, InlineStyle::Bold)];
    assert_eq!(apply_inline_styles("Hello world", &ranges), "**Hello** world");
}

#[test]
fn non_overlapping_ranges_are_order_independent() {
    let forward = [
        StyleRange::new(0, 5, InlineStyle::Bold),
        StyleRange::new(6, 5, InlineStyle::Italic),
    ];
    let reversed = [
        StyleRange::new(6, 5, InlineStyle::Italic),
        StyleRange::new(0, 5, InlineStyle::Bold),
    ];
    assert_eq!(
        apply_inline_styles("Hello world", &forward),
        apply_inline_styles("Hello world", &reversed),
    );
}

#[test]
fn media_resolver_hit_and_miss() {
    let media = vec![MediaItem::new("m1", "http://x/1.png")];
    let mut entities = HashMap::new();
    entities.insert("e1".to_string(), Entity::media("m1"));

    let resolved = resolve_media(&media, &entities);
    assert_eq!(resolved.get("e1").map(String::as_str), Some("http://x/1.png"));
    assert_eq!(resolved.get("anything-else"), None);
}

#[test]
fn ordered_list_marker_is_constant() {
    // The ordered-item marker deliberately never increments; this pins
    // that behavior so a well-meaning "fix" shows up as a test failure.
    let mut out = String::new();
    for text in ["a", "b", "c"] {
        render_block(
            &ContentBlock::new(BlockType::OrderedListItem, text),
            &HashMap::new(),
            &mut out,
        );
    }
    assert_eq!(out, "1. a\n1. b\n1. c\n");
    assert!(!out.contains("2."));
    assert!(!out.contains("3."));
}

#[test]
fn document_renders_with_exact_blank_line_placement() {
    let mut entity_map = HashMap::new();
    entity_map.insert("0".to_string(), Entity::media("m1"));

    let article = Article {
        title: None,
        content_state: Some(ContentState {
            blocks: vec![
                ContentBlock::new(BlockType::HeaderOne, "Title"),
                ContentBlock::new(BlockType::Unstyled, "Body text"),
                ContentBlock::atomic("0"),
            ],
            entity_map,
        }),
        media_entities: vec![MediaItem::new("m1", "URL")],
        cover_image: None,
    };

    assert_eq!(
        content_state_to_markdown(&article).unwrap(),
        "# Title\n\nBody text\n\n\n![](URL)\n\n"
    );
}

#[test]
fn wire_shaped_json_converts_end_to_end() {
    // The raw shapes the fetcher hands over: numeric entity keys in
    // ranges, string keys in the entity map.
    let json = r#"{
        "title": "From the wire",
        "content_state": {
            "blocks": [
                {"type": "header-two", "text": "Section"},
                {
                    "type": "unstyled",
                    "text": "Hello world",
                    "inlineStyleRanges": [
                        {"offset": 0, "length": 5, "style": "BOLD"},
                        {"offset": 6, "length": 5, "style": "UNDERLINE"}
                    ]
                },
                {"type": "blockquote", "text": "quoted"},
                {"type": "atomic", "entityRanges": [{"key": 0, "offset": 0, "length": 1}]},
                {"type": "atomic", "entityRanges": [{"key": 7, "offset": 0, "length": 1}]}
            ],
            "entityMap": {
                "0": {"type": "MEDIA", "data": {"mediaItems": [{"mediaId": "m9"}]}}
            }
        },
        "media_entities": [{"mediaId": "m9", "mediaUrl": "http://x/9.jpg"}]
    }"#;
    let article: Article = serde_json::from_str(json).unwrap();

    let md = content_state_to_markdown(&article).unwrap();
    assert_eq!(
        md,
        "## Section\n\n**Hello** world\n\n> quoted\n\n\n![](http://x/9.jpg)\n\n"
    );
}

#[test]
fn out_of_range_styles_never_panic() {
    let mut block = ContentBlock::new(BlockType::Unstyled, "short");
    block
        .inline_style_ranges
        .push(StyleRange::new(3, 1000, InlineStyle::Bold));
    block
        .inline_style_ranges
        .push(StyleRange::new(9999, 5, InlineStyle::Italic));

    let fragment = render_one(&block, &HashMap::new());
    assert_eq!(fragment, "sho**rt**\n\n");
}
