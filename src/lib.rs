pub mod config;
pub mod crawler;
pub mod listing;

pub use crawler::{crawl, crawl_webpage, resolve, CrawlError, Fetcher, LinkExtractor};
