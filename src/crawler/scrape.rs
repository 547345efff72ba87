use async_trait::async_trait;
use log2::debug;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;

use super::config::CrawlerConfig;
use super::error::FetchError;

/// Retrieves the body of a page.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Any non-success status and any transport failure is an error.
    async fn fetch(&self, address: &str) -> Result<String, FetchError>;
}

/// Pulls raw link targets out of a page body.
pub trait LinkExtractor: Send + Sync {
    /// Every href value found on anchors, in document order, unvalidated.
    fn extract(&self, body: &str) -> Vec<String>;
}

/// Plain GET over reqwest: no custom headers, no cookie store, default
/// redirect handling.
pub struct HttpFetcher {
    client: Client,
    timeout: Option<Duration>,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client, timeout: None }
    }

    pub fn from_config(config: &CrawlerConfig) -> Self {
        let fetcher = Self::new(Client::new());
        match config.request_timeout_sec {
            Some(sec) => fetcher.with_timeout(Duration::from_secs(sec)),
            None => fetcher,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, address: &str) -> Result<String, FetchError> {
        let mut request = self.client.get(address);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes from {}", body.len(), address);
        Ok(body)
    }
}

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").unwrap());

/// Extracts `href` attributes of `<a>` elements with the html5ever parser
/// behind `scraper`.
pub struct HtmlLinkExtractor;

impl HtmlLinkExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlLinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkExtractor for HtmlLinkExtractor {
    fn extract(&self, body: &str) -> Vec<String> {
        let document = Html::parse_document(body);
        document
            .select(&ANCHOR_SELECTOR)
            .filter_map(|element| element.value().attr("href"))
            .map(str::to_string)
            .collect()
    }
}
