//! Document model types.
//!
//! Typed versions of the JSON shapes crossing the fetch boundary, plus
//! the saved-document header structures.

mod block;
mod entity;
mod saved;
mod tweet;

pub use block::{BlockType, ContentBlock, EntityRange, InlineStyle, StyleRange};
pub use entity::{Article, ContentState, Entity, EntityData, MediaItem, MediaRef};
pub use saved::{DocKind, SaveOutcome, SavedThread, ThreadMeta};
pub use tweet::{filter_thread, Author, Tweet};
