//! Content-block types for rich-text documents.
//!
//! These mirror the wire shapes produced by the upstream block-based
//! editor: a flat list of typed blocks, each carrying raw text plus
//! offset-based inline style ranges and entity references.

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// One structural unit of a rich-text document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Block type tag.
    #[serde(rename = "type", default)]
    pub block_type: BlockType,

    /// Raw text content of the block.
    #[serde(default)]
    pub text: String,

    /// Inline style spans over `text`.
    #[serde(rename = "inlineStyleRanges", default)]
    pub inline_style_ranges: Vec<StyleRange>,

    /// Entity references attached to the block.
    #[serde(rename = "entityRanges", default)]
    pub entity_ranges: Vec<EntityRange>,
}

impl ContentBlock {
    /// Create a block with a type and plain text.
    pub fn new(block_type: BlockType, text: impl Into<String>) -> Self {
        Self {
            block_type,
            text: text.into(),
            inline_style_ranges: Vec::new(),
            entity_ranges: Vec::new(),
        }
    }

    /// Create an atomic (embedded-media) block referencing an entity key.
    pub fn atomic(entity_key: impl Into<String>) -> Self {
        Self {
            block_type: BlockType::Atomic,
            text: String::new(),
            inline_style_ranges: Vec::new(),
            entity_ranges: vec![EntityRange {
                key: entity_key.into(),
                offset: 0,
                length: 0,
            }],
        }
    }

    /// First entity key referenced by this block, if any.
    ///
    /// Only the first range is consumed for media resolution.
    pub fn first_entity_key(&self) -> Option<&str> {
        self.entity_ranges.first().map(|r| r.key.as_str())
    }
}

/// Block type tags emitted by the upstream editor.
///
/// Unknown tags deserialize to [`BlockType::Unstyled`], so dispatch over
/// this enum stays exhaustive while tolerating new upstream tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockType {
    /// `# ` heading
    HeaderOne,
    /// `## ` heading
    HeaderTwo,
    /// `### ` heading
    HeaderThree,
    /// `> ` quote
    Blockquote,
    /// `- ` bullet item
    UnorderedListItem,
    /// `1. ` numbered item
    OrderedListItem,
    /// Embedded-media placeholder
    Atomic,
    /// Plain paragraph (default and fallback)
    #[default]
    Unstyled,
}

impl BlockType {
    /// Parse a wire tag; unrecognized tags fall back to `Unstyled`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "header-one" => BlockType::HeaderOne,
            "header-two" => BlockType::HeaderTwo,
            "header-three" => BlockType::HeaderThree,
            "blockquote" => BlockType::Blockquote,
            "unordered-list-item" => BlockType::UnorderedListItem,
            "ordered-list-item" => BlockType::OrderedListItem,
            "atomic" => BlockType::Atomic,
            _ => BlockType::Unstyled,
        }
    }

    /// Wire tag for this block type.
    pub fn as_tag(&self) -> &'static str {
        match self {
            BlockType::HeaderOne => "header-one",
            BlockType::HeaderTwo => "header-two",
            BlockType::HeaderThree => "header-three",
            BlockType::Blockquote => "blockquote",
            BlockType::UnorderedListItem => "unordered-list-item",
            BlockType::OrderedListItem => "ordered-list-item",
            BlockType::Atomic => "atomic",
            BlockType::Unstyled => "unstyled",
        }
    }
}

impl Serialize for BlockType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for BlockType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(BlockType::from_tag(&tag))
    }
}

/// An offset/length/style triple over a block's text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleRange {
    /// Start position, in characters.
    pub offset: usize,

    /// Span length, in characters.
    pub length: usize,

    /// Style to apply over the span.
    pub style: InlineStyle,
}

impl StyleRange {
    /// Create a style range.
    pub fn new(offset: usize, length: usize, style: InlineStyle) -> Self {
        Self {
            offset,
            length,
            style,
        }
    }
}

/// Inline style tags. Styles other than bold and italic are carried
/// through deserialization but render as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStyle {
    /// `**…**`
    Bold,
    /// `*…*`
    Italic,
    /// Any other upstream style; passes through unchanged.
    Other,
}

impl InlineStyle {
    /// Parse a wire tag; unrecognized tags map to `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "BOLD" => InlineStyle::Bold,
            "ITALIC" => InlineStyle::Italic,
            _ => InlineStyle::Other,
        }
    }
}

impl Serialize for InlineStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tag = match self {
            InlineStyle::Bold => "BOLD",
            InlineStyle::Italic => "ITALIC",
            InlineStyle::Other => "OTHER",
        };
        serializer.serialize_str(tag)
    }
}

impl<'de> Deserialize<'de> for InlineStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(InlineStyle::from_tag(&tag))
    }
}

/// A reference from a block to an entity in the document's entity map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRange {
    /// Entity key. The wire encodes this as a number while the entity map
    /// is keyed by strings, so both forms deserialize to `String`.
    #[serde(deserialize_with = "key_from_number_or_string")]
    pub key: String,

    /// Start position of the range (unused for media blocks).
    #[serde(default)]
    pub offset: usize,

    /// Length of the range (unused for media blocks).
    #[serde(default)]
    pub length: usize,
}

/// Accept either a JSON number or string as a map key.
pub(crate) fn key_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::String(s) => Ok(s),
        other => Err(D::Error::custom(format!(
            "expected number or string key, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_type_tags() {
        assert_eq!(BlockType::from_tag("header-one"), BlockType::HeaderOne);
        assert_eq!(BlockType::from_tag("atomic"), BlockType::Atomic);
        assert_eq!(BlockType::from_tag("code-block"), BlockType::Unstyled);
        assert_eq!(BlockType::HeaderTwo.as_tag(), "header-two");
    }

    #[test]
    fn test_inline_style_tags() {
        assert_eq!(InlineStyle::from_tag("BOLD"), InlineStyle::Bold);
        assert_eq!(InlineStyle::from_tag("ITALIC"), InlineStyle::Italic);
        assert_eq!(InlineStyle::from_tag("UNDERLINE"), InlineStyle::Other);
    }

    #[test]
    fn test_block_deserialize() {
        let json = r#"{
            "type": "unstyled",
            "text": "Hello world",
            "inlineStyleRanges": [{"offset": 0, "length": 5, "style": "BOLD"}],
            "entityRanges": []
        }"#;
        let block: ContentBlock = serde_json::from_str(json).unwrap();
        assert_eq!(block.block_type, BlockType::Unstyled);
        assert_eq!(block.text, "Hello world");
        assert_eq!(block.inline_style_ranges.len(), 1);
        assert_eq!(block.inline_style_ranges[0].style, InlineStyle::Bold);
    }

    #[test]
    fn test_entity_range_numeric_key() {
        let json = r#"{"key": 0, "offset": 0, "length": 1}"#;
        let range: EntityRange = serde_json::from_str(json).unwrap();
        assert_eq!(range.key, "0");

        let json = r#"{"key": "e1"}"#;
        let range: EntityRange = serde_json::from_str(json).unwrap();
        assert_eq!(range.key, "e1");
    }

    #[test]
    fn test_unknown_block_type_falls_back_to_unstyled() {
        let json = r#"{"type": "table", "text": "cells"}"#;
        let block: ContentBlock = serde_json::from_str(json).unwrap();
        assert_eq!(block.block_type, BlockType::Unstyled);
    }

    #[test]
    fn test_first_entity_key() {
        let block = ContentBlock::atomic("3");
        assert_eq!(block.first_entity_key(), Some("3"));

        let plain = ContentBlock::new(BlockType::Unstyled, "text");
        assert_eq!(plain.first_entity_key(), None);
    }
}
