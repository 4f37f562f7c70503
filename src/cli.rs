//! Command-line interface definitions for Open Banking News.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The API key can be provided via a command-line flag or the `NEWS_API_KEY`
//! environment variable.

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the Open Banking News collector.
///
/// # Examples
///
/// ```sh
/// # Fetch articles for the default query over a date window
/// open_banking_news --from-date 2019-01-01 --to-date 2025-12-31
///
/// # Custom query and output path
/// open_banking_news -q "consumer-driven banking" \
///     --from-date 2024-01-01 --to-date 2024-12-31 \
///     -o data/raw/cdb_articles.csv
///
/// # Also scrape a list of press release pages
/// open_banking_news --from-date 2019-01-01 --to-date 2025-12-31 \
///     --press-urls press_urls.txt
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Search keywords for the news API query
    #[arg(short, long, default_value = "open banking Canada")]
    pub query: String,

    /// Inclusive start of the fetch window (YYYY-MM-DD)
    #[arg(long)]
    pub from_date: NaiveDate,

    /// Inclusive end of the fetch window (YYYY-MM-DD)
    #[arg(long)]
    pub to_date: NaiveDate,

    /// Number of articles to request (the API caps a page at 100)
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub page_size: u32,

    /// News API key
    #[arg(long, env = "NEWS_API_KEY")]
    pub api_key: String,

    /// Destination CSV for fetched article records
    #[arg(short = 'o', long, default_value = "data/raw/news_articles.csv")]
    pub articles_output: PathBuf,

    /// Optional file listing one press release URL per line
    #[arg(long)]
    pub press_urls: Option<PathBuf>,

    /// Destination CSV for scraped press release text
    #[arg(long, default_value = "data/raw/press_releases.csv")]
    pub press_output: PathBuf,
}
