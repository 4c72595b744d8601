//! Error types for fetch operations.

use std::io;
use thiserror::Error;

/// Errors that can occur while fetching and saving a single image.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request error: DNS, refused connection, timeout or a non-2xx status.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// I/O error during file operations.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Returns `true` for failures that happened on the way to the server
    /// rather than on the local side.
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Request(_) | FetchError::InvalidUrl(_))
    }
}
