//! Sources for fetching Open Banking coverage.
//!
//! This module contains submodules for the two kinds of source the pipeline
//! ingests from:
//!
//! # Supported Sources
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | News search API | [`newsapi`] | JSON API | Requires API key; query + date window search |
//! | Press release pages | [`press`] | HTML scraping | Best-effort `<p>` text extraction |
//!
//! # Common Patterns
//!
//! Both sources issue exactly one HTTP request per call against a client with
//! a fixed 30-second timeout, and retain no state between calls. They differ
//! deliberately in failure policy:
//!
//! - The API source is **fail-fast**: a non-success status or transport error
//!   propagates to the caller as a typed failure.
//! - The press release source is **fail-soft**: failed pages are logged and
//!   skipped so one bad URL cannot abort a batch.

use crate::error::Result;
use reqwest::Client;
use std::time::Duration;

pub mod newsapi;
pub mod press;

/// Timeout applied to every outbound request.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Build an HTTP client with the fixed fetch timeout.
pub fn http_client() -> Result<Client> {
    Ok(Client::builder().timeout(FETCH_TIMEOUT).build()?)
}
