use anyhow::Context;
use clap::Parser;
use image_fetcher::{fetch_all, parse_url_list, FetchConfig, DEFAULT_OUTPUT_DIR, DEFAULT_USER_AGENT};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "image-fetcher")]
#[command(about = "Fetch images from URLs, skipping non-images and duplicates", long_about = None)]
#[command(version)]
struct Args {
    /// Image URLs (comma-separated entries allowed); prompts when omitted
    urls: Vec<String>,

    /// Output directory for fetched images
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Per-request timeout (e.g. "10s", "500ms")
    #[arg(long, default_value = "10s", value_parser = humantime::parse_duration)]
    timeout: Duration,

    /// User-Agent header sent with each request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn read_url_line() -> anyhow::Result<String> {
    print!("Please enter image URLs (comma separated): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read URLs from stdin")?;
    Ok(line)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the status lines
    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("image_fetcher={}", log_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    println!("Welcome to the Ubuntu Image Fetcher");
    println!("A tool for mindfully collecting images from the web\n");

    let urls = if args.urls.is_empty() {
        parse_url_list(&read_url_line()?)
    } else {
        parse_url_list(&args.urls.join(","))
    };

    let config = FetchConfig {
        output_dir: args.output,
        timeout: args.timeout,
        user_agent: args.user_agent,
    };

    fetch_all(&config, &urls)
        .await
        .with_context(|| format!("cannot fetch into {}", config.output_dir.display()))?;

    println!("\nConnection strengthened. Community enriched.");
    Ok(())
}
