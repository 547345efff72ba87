use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::crawler::{CrawlerConfig, DEFAULT_MAX_DEPTH};

/// Address crawled when `--url` is not given
pub const DEFAULT_URL: &str = "https://www.example.com/";

/// Log levels as defined in log2 crate
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Program arguments. `CrawlerConfig` describes only the crawl itself.
#[derive(Parser, Debug, Serialize, Deserialize)]
#[command(author, version, about = "Lists every address reachable from a page within a number of link hops", long_about = None)]
pub struct Config {
    /// The url that you want to crawl
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,
    /// The maximum number of links deep to traverse
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub depth: usize,
    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", value_enum)]
    pub log_level: LogLevel,
}

impl Config {
    pub fn new() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.url.trim().is_empty() {
            anyhow::bail!("url must not be empty");
        }
        if self.timeout == Some(0) {
            anyhow::bail!("timeout must be greater than 0");
        }
        Ok(())
    }

    pub fn crawler_config(&self) -> CrawlerConfig {
        let config = CrawlerConfig::new(self.url.clone()).with_max_depth(self.depth);
        match self.timeout {
            Some(sec) => config.with_request_timeout(sec),
            None => config,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::try_parse_from(["depth-crawler"]).unwrap();
        assert_eq!(cfg.url, "https://www.example.com/");
        assert_eq!(cfg.depth, 2);
        assert_eq!(cfg.timeout, None);
        assert_eq!(cfg.log_level, LogLevel::Info);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_flags() {
        let cfg = Config::try_parse_from([
            "depth-crawler", "--url", "http://a.com/x", "--depth", "0", "--timeout", "5", "--log-level", "debug",
        ])
        .unwrap();
        let crawler = cfg.crawler_config();
        assert_eq!(crawler.root, "http://a.com/x");
        assert_eq!(crawler.max_depth, 0);
        assert_eq!(crawler.request_timeout_sec, Some(5));
        assert_eq!(cfg.log_level.to_string(), "debug");
    }

    #[test]
    fn test_negative_depth_is_rejected() {
        assert!(Config::try_parse_from(["depth-crawler", "--depth", "-1"]).is_err());
    }

    #[test]
    fn test_validate() {
        let cfg = Config::try_parse_from(["depth-crawler", "--url", " "]).unwrap();
        assert!(cfg.validate().is_err());
        let cfg = Config::try_parse_from(["depth-crawler", "--timeout", "0"]).unwrap();
        assert!(cfg.validate().is_err());
    }
}
