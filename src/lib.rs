//! Image Fetcher - collect images from a list of URLs
//!
//! This library downloads images from user-supplied URLs into a local
//! directory, skipping anything that is not served as an image and any
//! content already saved during the same run.
//!
//! # Features
//!
//! - **Content-Type Filtering**: Only `image/*` responses are saved
//! - **Duplicate Detection**: SHA-256 fingerprints, scoped to one run
//! - **Collision-Safe Naming**: Existing files are never overwritten
//! - **Per-URL Isolation**: A failing URL never stops the batch
//!
//! # Example
//!
//! ```no_run
//! use image_fetcher::{fetch_all, parse_url_list, FetchConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let urls = parse_url_list("https://example.com/cat.png,https://example.com/dog.jpg");
//! fetch_all(&FetchConfig::default(), &urls).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod fetch;
mod filename;
mod hash;
mod orchestrator;
mod types;

pub use error::FetchError;
pub use fetch::{build_client, fetch_image};
pub use filename::{filename_from_url, split_extension, unique_path, FALLBACK_FILENAME};
pub use hash::{content_hash, ContentHasher, SeenHashes};
pub use orchestrator::{fetch_all, parse_url_list};
pub use types::{
    FetchConfig, FetchOutcome, RunSummary, DEFAULT_OUTPUT_DIR, DEFAULT_TIMEOUT,
    DEFAULT_USER_AGENT,
};
