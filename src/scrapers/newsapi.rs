//! News-search API article source.
//!
//! Fetches articles matching a query and an inclusive date window from a
//! NewsAPI-style `everything` endpoint and normalizes each response item into
//! an [`ArticleRecord`]. The language filter (`en`) and sort order
//! (`relevancy`) are fixed.
//!
//! One call performs exactly one GET. Pagination beyond the first page is not
//! handled — only the first `page_size` results are returned — and a
//! non-success response fails the call with no retry.

use crate::error::{Error, Result};
use crate::models::ArticleRecord;
use crate::scrapers;
use crate::utils::truncate_for_log;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, instrument, warn};

const NEWSAPI_BASE_URL: &str = "https://newsapi.org";

/// Top-level search response. A body without an `articles` key is treated as
/// an empty result set, not an error.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<RawArticle>,
}

/// One article as the API returns it. Every field defaults to absent.
#[derive(Debug, Deserialize)]
struct RawArticle {
    #[serde(default)]
    source: Option<RawSource>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default, rename = "publishedAt")]
    published_at: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    #[serde(default)]
    name: Option<String>,
}

impl RawArticle {
    /// Flatten the nested source object; a missing object or name becomes
    /// `None`.
    fn into_record(self) -> ArticleRecord {
        ArticleRecord {
            source: self.source.and_then(|s| s.name),
            author: self.author,
            title: self.title,
            description: self.description,
            content: self.content,
            published_at: self.published_at,
            url: self.url,
        }
    }
}

/// Client for the news-search API.
///
/// Holds the API credential and a reqwest client configured with the fixed
/// fetch timeout. No state is retained between calls.
pub struct NewsApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NewsApiClient {
    pub fn new(api_key: &str) -> Result<Self> {
        Ok(NewsApiClient {
            client: scrapers::http_client()?,
            base_url: NEWSAPI_BASE_URL.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// For testing: point the client at a mock server.
    #[cfg(test)]
    fn with_base_url(base_url: String, api_key: &str) -> Self {
        NewsApiClient {
            client: Client::new(),
            base_url,
            api_key: api_key.to_string(),
        }
    }

    /// Fetch articles matching `query` published within the inclusive
    /// `from_date`..`to_date` window.
    ///
    /// Records come back in the API's order; no re-sorting and no
    /// deduplication is applied.
    ///
    /// # Errors
    ///
    /// [`Error::HttpStatus`] for a non-success response (no records are
    /// produced), [`Error::Http`] for transport or body-decoding failures.
    #[instrument(level = "info", skip(self))]
    pub async fn fetch_articles(
        &self,
        query: &str,
        from_date: NaiveDate,
        to_date: NaiveDate,
        page_size: u32,
    ) -> Result<Vec<ArticleRecord>> {
        let url = format!("{}/v2/everything", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("from", &from_date.to_string()),
                ("to", &to_date.to_string()),
                ("language", "en"),
                ("sortBy", "relevancy"),
                ("pageSize", &page_size.to_string()),
                ("apiKey", &self.api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                %status,
                body = %truncate_for_log(&body, 300),
                "News API returned an error status"
            );
            return Err(Error::HttpStatus(status));
        }

        let parsed: SearchResponse = response.json().await?;
        let records: Vec<ArticleRecord> = parsed
            .articles
            .into_iter()
            .map(RawArticle::into_record)
            .collect();

        info!(count = records.len(), "Fetched article records");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn window() -> (NaiveDate, NaiveDate) {
        (
            NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_fetch_returns_records_in_api_order() {
        let server = MockServer::start().await;
        let client = NewsApiClient::with_base_url(server.uri(), "test-key");

        let body = serde_json::json!({
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {
                    "source": {"id": "financial-post", "name": "Financial Post"},
                    "author": "A. Reporter",
                    "title": "Ottawa tables open banking framework",
                    "description": "The long-promised framework arrives",
                    "content": "Full article text",
                    "publishedAt": "2024-11-21T14:30:00Z",
                    "url": "https://example.com/a"
                },
                {
                    "source": {"id": null, "name": "CBC News"},
                    "author": null,
                    "title": "Banks respond to consultation",
                    "description": null,
                    "content": null,
                    "publishedAt": "2024-11-22T09:00:00Z",
                    "url": "https://example.com/b"
                }
            ]
        });

        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .and(query_param("q", "open banking Canada"))
            .and(query_param("from", "2019-01-01"))
            .and(query_param("to", "2025-12-31"))
            .and(query_param("language", "en"))
            .and(query_param("sortBy", "relevancy"))
            .and(query_param("pageSize", "100"))
            .and(query_param("apiKey", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let (from, to) = window();
        let records = client
            .fetch_articles("open banking Canada", from, to, 100)
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].source.as_deref(), Some("Financial Post"));
        assert_eq!(records[0].published_at.as_deref(), Some("2024-11-21T14:30:00Z"));
        assert_eq!(records[1].source.as_deref(), Some("CBC News"));
        assert!(records[1].author.is_none());
    }

    #[tokio::test]
    async fn test_missing_nested_source_maps_to_none() {
        let server = MockServer::start().await;
        let client = NewsApiClient::with_base_url(server.uri(), "test-key");

        // One article with no source object at all, one whose source object
        // has no name.
        let body = serde_json::json!({
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {"title": "No source object"},
                {"source": {"id": "x"}, "title": "Source without a name"}
            ]
        });

        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let (from, to) = window();
        let records = client.fetch_articles("q", from, to, 50).await.unwrap();

        assert_eq!(records.len(), 2);
        assert!(records[0].source.is_none());
        assert_eq!(records[0].title.as_deref(), Some("No source object"));
        assert!(records[1].source.is_none());
    }

    #[tokio::test]
    async fn test_absent_articles_key_yields_empty() {
        let server = MockServer::start().await;
        let client = NewsApiClient::with_base_url(server.uri(), "test-key");

        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"status": "ok", "totalResults": 0})),
            )
            .mount(&server)
            .await;

        let (from, to) = window();
        let records = client.fetch_articles("q", from, to, 100).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_fails_without_records() {
        let server = MockServer::start().await;
        let client = NewsApiClient::with_base_url(server.uri(), "bad-key");

        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .respond_with(ResponseTemplate::new(401).set_body_json(
                serde_json::json!({"status": "error", "code": "apiKeyInvalid"}),
            ))
            .mount(&server)
            .await;

        let (from, to) = window();
        let err = client.fetch_articles("q", from, to, 100).await.unwrap_err();

        match err {
            Error::HttpStatus(status) => assert_eq!(status.as_u16(), 401),
            other => panic!("expected HttpStatus error, got {other:?}"),
        }
    }
}
