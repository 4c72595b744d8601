//! Data structures for fetch operations.

use crate::error::FetchError;
use std::path::PathBuf;
use std::time::Duration;

/// Directory images are written to when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "Fetched_Images";

/// User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "UbuntuImageFetcher/1.0";

/// Upper bound on a single request, connect through last body byte.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for one fetch run.
///
/// # Example
///
/// ```
/// use image_fetcher::FetchConfig;
/// use std::time::Duration;
///
/// let config = FetchConfig {
///     output_dir: "downloads".into(),
///     timeout: Duration::from_secs(5),
///     user_agent: "MyFetcher/0.1".to_string(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Directory that receives the saved images (created if missing).
    pub output_dir: PathBuf,
    /// Timeout applied to each request.
    pub timeout: Duration,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// What happened to a single URL.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The image was written to `path`.
    Saved { filename: String, path: PathBuf },
    /// The server declared a non-image content type; nothing was hashed or saved.
    NotAnImage { content_type: String },
    /// The content was already saved earlier in this run.
    Duplicate { hash: String },
    /// The request or the write failed.
    Failed(FetchError),
}

impl FetchOutcome {
    /// Console lines describing this outcome for `url`.
    pub fn status_lines(&self, url: &str) -> Vec<String> {
        match self {
            FetchOutcome::Saved { filename, path } => vec![
                format!("✓ Successfully fetched: {}", filename),
                format!("✓ Image saved to {}", path.display()),
            ],
            FetchOutcome::NotAnImage { .. } => {
                vec![format!("✗ Skipped (not an image): {}", url)]
            }
            FetchOutcome::Duplicate { .. } => vec![format!("✗ Skipped duplicate: {}", url)],
            FetchOutcome::Failed(e) if e.is_transport() => {
                vec![format!("✗ Connection error for {}: {}", url, e)]
            }
            FetchOutcome::Failed(e) => vec![format!("✗ Error fetching {}: {}", url, e)],
        }
    }
}

/// Tally of outcomes over one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub saved: usize,
    pub not_images: usize,
    pub duplicates: usize,
    pub failed: usize,
}

impl RunSummary {
    pub(crate) fn record(&mut self, outcome: &FetchOutcome) {
        match outcome {
            FetchOutcome::Saved { .. } => self.saved += 1,
            FetchOutcome::NotAnImage { .. } => self.not_images += 1,
            FetchOutcome::Duplicate { .. } => self.duplicates += 1,
            FetchOutcome::Failed(_) => self.failed += 1,
        }
    }

    /// Number of URLs processed.
    pub fn total(&self) -> usize {
        self.saved + self.not_images + self.duplicates + self.failed
    }
}
