//! Media reference resolution.
//!
//! Blocks reach their media URLs through a two-level lookup chain:
//! block → entity key → entity → media id → media URL. Both mappings are
//! built fresh for each conversion call; an entity whose media id has no
//! matching document media item simply yields no entry.

use crate::model::{Entity, MediaItem};
use std::collections::HashMap;

/// Build the `entity key → media URL` mapping for one document.
pub fn resolve_media(
    media_entities: &[MediaItem],
    entity_map: &HashMap<String, Entity>,
) -> HashMap<String, String> {
    let by_media_id: HashMap<&str, &str> = media_entities
        .iter()
        .map(|m| (m.media_id.as_str(), m.media_url.as_str()))
        .collect();

    let mut resolved = HashMap::new();
    for (key, entity) in entity_map {
        if !entity.is_media() {
            continue;
        }
        let url = entity
            .first_media_id()
            .and_then(|id| by_media_id.get(id).copied());
        if let Some(url) = url {
            resolved.insert(key.clone(), url.to_string());
        }
    }
    resolved
}
