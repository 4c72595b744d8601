//! Single-URL fetch, validation and save.

use crate::error::FetchError;
use crate::filename::{filename_from_url, unique_path};
use crate::hash::{ContentHasher, SeenHashes};
use crate::types::{FetchConfig, FetchOutcome};
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::path::Path;
use tracing::{debug, warn};
use url::Url;

/// Largest buffer reserved up front from a declared Content-Length.
const MAX_PREALLOC: usize = 8 * 1024 * 1024;

/// Builds the HTTP client shared by every request of a run.
///
/// The timeout covers the whole request, body included. Redirects follow
/// the reqwest default policy.
pub fn build_client(config: &FetchConfig) -> Result<Client, FetchError> {
    let client = Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// Fetches `url` and saves it under `output_dir` unless it is not an image
/// or its content was already saved in this run.
///
/// Never fails: every error is reported through [`FetchOutcome::Failed`].
/// `seen` gains the hash of every image that gets past the duplicate check.
pub async fn fetch_image(
    client: &Client,
    url: &str,
    output_dir: &Path,
    seen: &mut SeenHashes,
) -> FetchOutcome {
    match try_fetch_image(client, url, output_dir, seen).await {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!("Failed to fetch {}: {}", url, e);
            FetchOutcome::Failed(e)
        }
    }
}

async fn try_fetch_image(
    client: &Client,
    url: &str,
    output_dir: &Path,
    seen: &mut SeenHashes,
) -> Result<FetchOutcome, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

    debug!("GET {}", parsed);
    let response = client.get(parsed.clone()).send().await?.error_for_status()?;

    // Missing header counts as empty and is rejected below
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !content_type.starts_with("image/") {
        debug!("Rejecting {} with content type {:?}", url, content_type);
        return Ok(FetchOutcome::NotAnImage { content_type });
    }

    // Buffer the body and hash it in the same pass. The declared length is
    // only a hint; the server may lie about it.
    let hint = response.content_length().unwrap_or(0).min(MAX_PREALLOC as u64) as usize;
    let mut content = Vec::with_capacity(hint);
    let mut hasher = ContentHasher::new();
    let mut byte_stream = response.bytes_stream();
    while let Some(piece) = byte_stream.next().await {
        let chunk = piece?;
        hasher.update(&chunk);
        content.extend_from_slice(&chunk);
    }
    let hash = hasher.finish();

    if seen.contains(&hash) {
        debug!("Content of {} already saved this run ({})", url, hash);
        return Ok(FetchOutcome::Duplicate { hash });
    }
    seen.insert(hash);

    let (filename, path) = unique_path(output_dir, &filename_from_url(&parsed)).await?;
    tokio::fs::write(&path, &content).await?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());

    Ok(FetchOutcome::Saved { filename, path })
}
