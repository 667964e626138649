//! Document assembly and the inverse front-matter parser.

mod frontmatter;
mod markdown;

pub use frontmatter::parse_frontmatter;
pub use markdown::{derive_filename, format_date, render_document};
