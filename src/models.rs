//! Data models for ingested articles and press releases.
//!
//! This module defines the records produced by the two sources:
//! - [`ArticleRecord`]: one normalized item from a news-search API response
//! - [`PressReleaseRecord`]: scraped page text correlated back to its URL
//!
//! Both derive `Serialize`/`Deserialize` so the CSV writer can derive its
//! header row from the field names and round-trip the data.

use serde::{Deserialize, Serialize};

/// A normalized article from a news-search API response.
///
/// Every field is nullable: the API omits fields freely, and an absent value
/// is recorded as `None` rather than an empty string. Records are created
/// once per response item and never mutated; no identity or uniqueness is
/// enforced, so duplicate URLs may appear.
///
/// Field declaration order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Name of the publishing outlet, read from the response's nested
    /// `source.name`.
    pub source: Option<String>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    /// ISO-8601 publication timestamp as reported by the API.
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub url: Option<String>,
}

/// Scraped press release text together with the page it came from.
///
/// The scraper itself returns bare text; this record is how the caller ties
/// that text back to a URL before persisting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressReleaseRecord {
    pub url: String,
    pub text: String,
}
