//! # Open Banking News
//!
//! A data-collection pipeline for studying public discourse about Open
//! Banking in Canada. It fetches matching articles from a news-search API,
//! optionally scrapes press release pages for their paragraph text, and
//! persists everything to CSV files for downstream analysis.
//!
//! ## Usage
//!
//! ```sh
//! NEWS_API_KEY=... open_banking_news \
//!     --from-date 2019-01-01 --to-date 2025-12-31 \
//!     --press-urls press_urls.txt
//! ```
//!
//! ## Architecture
//!
//! The pipeline is linear:
//! 1. **Fetch**: one API request for articles matching the query and date window
//! 2. **Scrape** (optional): one request per press release URL, best-effort
//! 3. **Output**: CSV files with headers derived from the record fields
//!
//! The article fetch is fail-fast — an API error aborts the run. Press
//! release scraping is fail-soft — failed pages are logged and skipped.

use clap::Parser;
use std::error::Error;
use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};
use url::Url;

mod cli;
mod error;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use scrapers::{newsapi::NewsApiClient, press};
use utils::ensure_writable_dir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("open_banking_news starting up");

    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    let args = Cli::parse();
    debug!(?args.query, ?args.from_date, ?args.to_date, page_size = args.page_size, "Parsed CLI arguments");

    // Early check: ensure the articles output directory is writable
    if let Some(dir) = parent_dir(&args.articles_output) {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir.display(),
                error = %e,
                "Articles output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e.into());
        }
    }

    // ---- Fetch articles ----
    info!(
        query = %args.query,
        from = %args.from_date,
        to = %args.to_date,
        page_size = args.page_size,
        "Fetching articles"
    );
    let api = NewsApiClient::new(&args.api_key)?;
    let articles = api
        .fetch_articles(&args.query, args.from_date, args.to_date, args.page_size)
        .await?;

    outputs::csv::write_records(&articles, &args.articles_output)?;
    info!(
        path = %args.articles_output.display(),
        count = articles.len(),
        "Wrote article CSV"
    );

    // ---- Press releases (optional) ----
    if let Some(ref urls_path) = args.press_urls {
        let raw = tokio::fs::read_to_string(urls_path).await?;
        let urls: Vec<String> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| match Url::parse(line) {
                Ok(parsed) => Some(parsed.to_string()),
                Err(e) => {
                    warn!(error = %e, line, "Skipping invalid press release URL");
                    None
                }
            })
            .collect();
        info!(count = urls.len(), path = %urls_path.display(), "Loaded press release URLs");

        let http = scrapers::http_client()?;
        let releases = press::fetch_press_releases(&http, &urls).await;

        outputs::csv::write_records(&releases, &args.press_output)?;
        info!(
            path = %args.press_output.display(),
            count = releases.len(),
            "Wrote press release CSV"
        );
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}

/// Parent directory of an output path, if it names one.
fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}
