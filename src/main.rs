use log2::*;
use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;

use depth_crawler::crawler::{self, HtmlLinkExtractor, HttpFetcher};
use depth_crawler::{config, listing};

/// Indicates start time of a project, lazily initialized
pub static START_TIME: once_cell::sync::Lazy<Instant> = once_cell::sync::Lazy::new(Instant::now);

#[tokio::main]
async fn main() -> Result<()> {
    let _ = *START_TIME;
    let cfg = config::Config::new();
    cfg.validate()?;
    let _log2 = stdout()
        .module(true) // include module name
        .module_with_line(true) // include line number from module
        .module_filter(|module| module.starts_with("depth_crawler")) // include only modules having this pattern
        .compress(false) // compress output
        .level(cfg.log_level.to_string()) // level of logging (trace - error)
        .start();

    let crawler_config = Arc::new(cfg.crawler_config());
    let fetcher = Arc::new(HttpFetcher::from_config(&crawler_config));
    let extractor = Arc::new(HtmlLinkExtractor::new());

    info!("Crawling {} to depth {}", crawler_config.root, crawler_config.max_depth);

    match crawler::crawl(crawler_config, fetcher, extractor).await {
        Ok(links) => {
            listing::print_links(&links);
            debug!("Done in {:?}", START_TIME.elapsed());
        }
        Err(e) => {
            error!("Crawling failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
