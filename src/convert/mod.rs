//! Conversion of rich-text block documents to Markdown.
//!
//! The pipeline is purely functional over immutable inputs: inline style
//! splicing ([`apply_inline_styles`]), the per-document media lookup
//! chain ([`resolve_media`]), and block dispatch ([`render_block`]). It
//! performs no I/O and is safe to invoke concurrently for independent
//! documents.

mod block;
mod media;
mod styles;

pub use block::{content_state_to_markdown, render_block};
pub use media::resolve_media;
pub use styles::apply_inline_styles;
