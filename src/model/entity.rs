//! Entity and media types.
//!
//! Blocks reference media indirectly: a block's entity range names a key
//! in the document's entity map, the entity carries a media id, and the
//! document-level media list maps that id to a URL. Each hop is an
//! explicit `Option`-returning lookup so dangling references drop out
//! silently instead of failing the conversion.

use super::block::{key_from_number_or_string, ContentBlock};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A document-level entity referenced by blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Entity type tag; only `"MEDIA"` entities are resolved.
    #[serde(rename = "type", default)]
    pub entity_type: String,

    /// Entity payload.
    #[serde(default)]
    pub data: EntityData,
}

impl Entity {
    /// Create a MEDIA entity carrying a single media id.
    pub fn media(media_id: impl Into<String>) -> Self {
        Self {
            entity_type: "MEDIA".to_string(),
            data: EntityData {
                media_items: vec![MediaRef {
                    media_id: media_id.into(),
                }],
            },
        }
    }

    /// Whether this entity carries media.
    pub fn is_media(&self) -> bool {
        self.entity_type == "MEDIA"
    }

    /// First media id carried by this entity, if any.
    pub fn first_media_id(&self) -> Option<&str> {
        self.data.media_items.first().map(|m| m.media_id.as_str())
    }
}

/// Payload of an entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityData {
    /// Media ids referenced by the entity, in order.
    #[serde(rename = "mediaItems", default)]
    pub media_items: Vec<MediaRef>,
}

/// A reference to a media item by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaRef {
    /// Id into the document's media entity list.
    #[serde(
        rename = "mediaId",
        deserialize_with = "key_from_number_or_string"
    )]
    pub media_id: String,
}

/// A resolvable media item from the document's media entity list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    /// Unique media id.
    #[serde(
        rename = "mediaId",
        deserialize_with = "key_from_number_or_string"
    )]
    pub media_id: String,

    /// Final media URL.
    #[serde(rename = "mediaUrl", default)]
    pub media_url: String,
}

impl MediaItem {
    /// Create a media item.
    pub fn new(media_id: impl Into<String>, media_url: impl Into<String>) -> Self {
        Self {
            media_id: media_id.into(),
            media_url: media_url.into(),
        }
    }
}

/// The rich-text content of an article: ordered blocks plus the entity
/// map they reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentState {
    /// Ordered block sequence.
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,

    /// Entity map keyed by entity key.
    #[serde(rename = "entityMap", default)]
    pub entity_map: HashMap<String, Entity>,
}

/// A rich-text article attached to a source item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Article {
    /// Article title.
    #[serde(default)]
    pub title: Option<String>,

    /// Rich-text content; absent for malformed input.
    #[serde(default)]
    pub content_state: Option<ContentState>,

    /// Document-level media list keyed by media id.
    #[serde(default)]
    pub media_entities: Vec<MediaItem>,

    /// Optional cover image URL.
    #[serde(default)]
    pub cover_image: Option<String>,
}
