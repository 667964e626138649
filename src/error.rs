//! Error types for the threadpocket library.

use std::io;
use thiserror::Error;

/// Result type alias for threadpocket operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while fetching, converting, or storing threads.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing saved documents.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The fetcher returned JSON that could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input URL does not contain a recognizable status id.
    #[error("Invalid status URL: {0}")]
    InvalidUrl(String),

    /// The upstream fetcher found no post for the given id.
    #[error("Post not found: {0}")]
    TweetNotFound(String),

    /// The external fetch process failed.
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// A saved-document filename failed validation.
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    /// A saved document does not exist in the store.
    #[error("Saved thread not found: {0}")]
    ThreadNotFound(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
