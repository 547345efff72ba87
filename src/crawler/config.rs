use std::sync::Arc;

/// Default crawl depth, in link hops from the root
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// Configuration for the crawler
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// Seed address, kept exactly as given
    pub root: String,
    /// Pages at this depth are listed but never expanded
    pub max_depth: usize,
    /// Per-request timeout for the HTTP fetcher; `None` leaves reqwest's default
    pub request_timeout_sec: Option<u64>,
}

impl CrawlerConfig {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            max_depth: DEFAULT_MAX_DEPTH,
            request_timeout_sec: None,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_request_timeout(mut self, timeout_sec: u64) -> Self {
        self.request_timeout_sec = Some(timeout_sec);
        self
    }
}

pub type CrawlerConfigRef = Arc<CrawlerConfig>;
