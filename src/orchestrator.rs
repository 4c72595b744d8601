//! Run orchestration: URL list parsing and the sequential fetch loop.

use crate::error::FetchError;
use crate::fetch::{build_client, fetch_image};
use crate::hash::SeenHashes;
use crate::types::{FetchConfig, RunSummary};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// Splits one line of input on commas, trimming whitespace and dropping
/// empty entries. Order is preserved.
pub fn parse_url_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .collect()
}

/// Fetches every URL in order, printing status lines as it goes.
///
/// This is the main entry point for a run. It performs the following steps:
///
/// 1. Creates the output directory if it does not exist
/// 2. Builds one HTTP client with the configured timeout and User-Agent
/// 3. Calls [`fetch_image`] for each URL, sharing one [`SeenHashes`]
///
/// Per-URL failures are printed and counted; they never stop the run.
///
/// # Returns
///
/// The tally of outcomes, or an error if the output directory could not be
/// created or the client could not be built.
///
/// # Example
///
/// ```no_run
/// use image_fetcher::{fetch_all, parse_url_list, FetchConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let urls = parse_url_list("https://example.com/a.png, https://example.com/b.jpg");
/// let summary = fetch_all(&FetchConfig::default(), &urls).await?;
/// println!("saved {}", summary.saved);
/// # Ok(())
/// # }
/// ```
pub async fn fetch_all(config: &FetchConfig, urls: &[String]) -> Result<RunSummary, FetchError> {
    tokio::fs::create_dir_all(&config.output_dir).await?;
    let client = build_client(config)?;

    info!(
        "Fetching {} URL(s) into {}",
        urls.len(),
        config.output_dir.display()
    );

    let pb = progress_bar(urls.len() as u64);
    let mut seen = SeenHashes::new();
    let mut summary = RunSummary::default();

    for url in urls {
        pb.set_message(url.clone());
        let outcome = fetch_image(&client, url, &config.output_dir, &mut seen).await;
        pb.suspend(|| {
            for line in outcome.status_lines(url) {
                println!("{}", line);
            }
        });
        summary.record(&outcome);
        pb.inc(1);
    }

    pb.finish_and_clear();
    info!(
        "Run finished: {} saved, {} not images, {} duplicates, {} failed",
        summary.saved, summary.not_images, summary.duplicates, summary.failed
    );
    Ok(summary)
}

/// Progress bar on stderr, only when stdout is an interactive terminal.
fn progress_bar(len: u64) -> ProgressBar {
    if !atty::is(atty::Stream::Stdout) {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░ "));
    }
    pb
}
