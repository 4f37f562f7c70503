//! Error types for the fail-fast operations.
//!
//! The article fetcher and the CSV writer surface typed failures through
//! [`Error`]. The press release scraper intentionally does not: it maps every
//! failure to an absent result so that one bad page cannot abort a batch.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The news API answered with a non-success status. No records are
    /// produced and no retry is attempted.
    #[error("HTTP status {0}")]
    HttpStatus(StatusCode),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
