//! Press release page scraper.
//!
//! Open Banking press releases come from many issuers (the Department of
//! Finance, banks, fintech associations) with no shared markup, so the
//! scraper keeps to the lowest common denominator: the text of every `<p>`
//! element on the page, joined into one string.
//!
//! Failures are deliberately non-fatal. Callers process many URLs in a
//! batch, and one unreachable or malformed page must not abort the rest, so
//! fetch errors are logged and mapped to an absent result instead of
//! propagating.

use crate::models::PressReleaseRecord;
use futures::stream::{self, StreamExt};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument, warn};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Fetch one press release page and return its concatenated paragraph text.
///
/// Returns `None` only when the fetch fails (network error, non-success
/// status). A page with no `<p>` elements yields `Some("")` — empty content
/// is distinct from a failed fetch.
#[instrument(level = "info", skip(client))]
pub async fn fetch_press_release(client: &Client, url: &str) -> Option<String> {
    match try_fetch(client, url).await {
        Ok(text) => Some(text),
        Err(e) => {
            warn!(error = %e, %url, "Failed to fetch press release; skipping");
            None
        }
    }
}

async fn try_fetch(client: &Client, url: &str) -> Result<String, reqwest::Error> {
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    Ok(extract_paragraphs(&body))
}

/// Extract and join the text of every `<p>` element in `html`.
///
/// Text fragments within one paragraph are joined with single spaces,
/// trimmed, and internal whitespace runs collapsed; the paragraphs are then
/// joined with a single space separator.
pub fn extract_paragraphs(html: &str) -> String {
    let document = Html::parse_document(html);
    let paragraph_selector = Selector::parse("p").unwrap();

    let mut paragraphs = Vec::new();
    for element in document.select(&paragraph_selector) {
        let text = element.text().collect::<Vec<_>>().join(" ");
        let text = WHITESPACE.replace_all(text.trim(), " ").into_owned();
        paragraphs.push(text);
    }

    paragraphs.join(" ")
}

/// Fetch a batch of press release pages sequentially.
///
/// Failed pages are skipped without failing the batch; the returned records
/// preserve the input order of the surviving URLs.
#[instrument(level = "info", skip_all)]
pub async fn fetch_press_releases(client: &Client, urls: &[String]) -> Vec<PressReleaseRecord> {
    let records: Vec<PressReleaseRecord> = stream::iter(urls)
        .then(|url| async move {
            fetch_press_release(client, url).await.map(|text| {
                debug!(%url, bytes = text.len(), "Fetched press release");
                PressReleaseRecord {
                    url: url.clone(),
                    text,
                }
            })
        })
        .filter_map(std::future::ready)
        .collect()
        .await;

    info!(
        count = records.len(),
        total = urls.len(),
        "Fetched press release contents"
    );
    records
}
