use thiserror::Error;

/// A link or base address that could not be turned into an absolute URL.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("failed to parse base URL {base:?}: {source}")]
    InvalidBase {
        base: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to resolve target {target:?}: {source}")]
    InvalidTarget {
        target: String,
        #[source]
        source: url::ParseError,
    },
}

/// A page whose body could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed with status code: {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Used by fetchers that do not sit on top of reqwest.
    #[error("{0}")]
    Other(String),
}

/// Failure that escapes `crawl` entirely.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("expansion task did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),
}
