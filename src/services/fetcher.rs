// src/services/fetcher.rs

//! Page fetching and SEO element extraction service.
//!
//! Fetches pages over HTTP and extracts the three SEO elements into
//! [`PageRecord`]s. Fetch or parse failures never reach the indexing
//! engine; they are logged and counted in the outcome.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{Config, PageRecord};
use crate::utils::clean_text;
use crate::utils::http::create_async_client;

/// Summary of a multi-page fetch run.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub records: Vec<PageRecord>,
    pub total: usize,
    pub failures: usize,
}

/// Supplier of extracted page records.
///
/// Abstracted so the analysis pipeline can run against a stub source
/// in tests.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch one page and extract its SEO elements.
    async fn fetch(&self, url: &str) -> Result<PageRecord>;

    /// Fetch all URLs, absorbing per-URL failures into the outcome.
    /// The default fetches sequentially; [`HttpFetcher`] overrides
    /// this with a bounded-concurrency version.
    async fn fetch_all(&self, urls: &[String]) -> FetchOutcome {
        let mut outcome = FetchOutcome {
            total: urls.len(),
            ..FetchOutcome::default()
        };
        for url in urls {
            match self.fetch(url).await {
                Ok(record) => outcome.records.push(record),
                Err(error) => {
                    outcome.failures += 1;
                    log::warn!("Failed to fetch {}: {}", url, error);
                }
            }
        }
        outcome
    }
}

/// Parsed CSS selectors for the extracted elements.
struct Selectors {
    title: Selector,
    meta_description: Selector,
    og_title: Selector,
}

impl Selectors {
    fn new() -> Result<Self> {
        Ok(Self {
            title: parse_selector("title")?,
            meta_description: parse_selector(r#"meta[name="description"]"#)?,
            og_title: parse_selector(r#"meta[property="og:title"]"#)?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| AppError::selector(selector, format!("{e:?}")))
}

/// HTTP-backed page source.
pub struct HttpFetcher {
    config: Arc<Config>,
    client: Client,
    selectors: Selectors,
}

impl HttpFetcher {
    /// Create a fetcher with a client configured from `config`.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = create_async_client(&config.fetcher)?;
        Ok(Self {
            config,
            client,
            selectors: Selectors::new()?,
        })
    }

    /// Extract the three SEO elements from a parsed document.
    fn extract_record(&self, document: &Html, url: &str) -> PageRecord {
        let title = document
            .select(&self.selectors.title)
            .next()
            .and_then(|el| clean_text(&el.text().collect::<String>()));

        let meta_description = document
            .select(&self.selectors.meta_description)
            .next()
            .and_then(|el| el.value().attr("content"))
            .and_then(clean_text);

        let og_title = document
            .select(&self.selectors.og_title)
            .next()
            .and_then(|el| el.value().attr("content"))
            .and_then(clean_text);

        PageRecord::new(url, title, meta_description, og_title)
    }
}

#[async_trait]
impl PageSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<PageRecord> {
        let parsed = Url::parse(url)?;
        let text = self
            .client
            .get(parsed)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| AppError::fetch(url, e))?
            .text()
            .await?;

        // Parse and extract synchronously; Html is not held across awaits.
        let document = Html::parse_document(&text);
        Ok(self.extract_record(&document, url))
    }

    /// Fetch all URLs with bounded concurrency and a polite delay
    /// between completions.
    async fn fetch_all(&self, urls: &[String]) -> FetchOutcome {
        let delay = Duration::from_millis(self.config.fetcher.request_delay_ms);
        let concurrency = self.config.fetcher.max_concurrent.max(1);

        let mut outcome = FetchOutcome {
            total: urls.len(),
            ..FetchOutcome::default()
        };

        // `buffered` (not `buffer_unordered`) keeps completion order
        // equal to input order, so the analysis log is deterministic.
        let fetches: Vec<_> = urls
            .iter()
            .map(|url| async move { (url, self.fetch(url).await) })
            .collect();
        let mut pages = stream::iter(fetches).buffered(concurrency);

        while let Some((url, result)) = pages.next().await {
            match result {
                Ok(record) => outcome.records.push(record),
                Err(error) => {
                    outcome.failures += 1;
                    log::warn!("Failed to fetch {}: {}", url, error);
                }
            }

            if delay.as_millis() > 0 {
                tokio::time::sleep(delay).await;
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(Arc::new(Config::default())).unwrap()
    }

    const SAMPLE_HTML: &str = r#"
        <html>
          <head>
            <title>  Example
                Page </title>
            <meta name="description" content="A sample description">
            <meta property="og:title" content="Example OG Title">
          </head>
          <body><h1>Hello</h1></body>
        </html>
    "#;

    #[test]
    fn extracts_all_three_elements() {
        let document = Html::parse_document(SAMPLE_HTML);
        let record = fetcher().extract_record(&document, "https://example.com");

        assert_eq!(record.url, "https://example.com");
        assert_eq!(record.title, "Example Page");
        assert_eq!(record.meta_description, "A sample description");
        assert_eq!(record.og_title, "Example OG Title");
    }

    #[test]
    fn missing_elements_become_placeholders() {
        let document = Html::parse_document("<html><head></head><body></body></html>");
        let record = fetcher().extract_record(&document, "https://bare.example");

        assert_eq!(record.title, "No title tag found");
        assert_eq!(record.meta_description, "No meta description found");
        assert_eq!(record.og_title, "No Open Graph title found");
    }

    #[test]
    fn whitespace_only_elements_count_as_missing() {
        let html = r#"<html><head><title>   </title>
            <meta name="description" content=""></head></html>"#;
        let document = Html::parse_document(html);
        let record = fetcher().extract_record(&document, "https://blank.example");

        assert_eq!(record.title, "No title tag found");
        assert_eq!(record.meta_description, "No meta description found");
    }

    #[tokio::test]
    async fn fetch_rejects_invalid_url() {
        let result = fetcher().fetch("not a url").await;
        assert!(matches!(result, Err(AppError::Url(_))));
    }
}
