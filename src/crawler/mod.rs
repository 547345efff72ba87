pub mod config;
pub mod error;
pub mod resolve;
pub mod runner;
pub mod scrape;
pub mod state;


pub use config::{CrawlerConfig, CrawlerConfigRef, DEFAULT_MAX_DEPTH};
pub use error::{CrawlError, FetchError, ResolutionError};
pub use resolve::resolve;
pub use runner::{crawl, crawl_webpage, crawl_with_state};
pub use scrape::{Fetcher, HtmlLinkExtractor, HttpFetcher, LinkExtractor};
pub use state::{CrawlerState, CrawlerStateRef};
