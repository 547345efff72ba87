use std::sync::Arc;
use std::sync::atomic::Ordering;
use log2::{debug, info, trace, warn};
use tokio::task::JoinSet;

use super::config::{CrawlerConfig, CrawlerConfigRef};
use super::error::CrawlError;
use super::resolve::resolve;
use super::scrape::{Fetcher, HtmlLinkExtractor, HttpFetcher, LinkExtractor};
use super::state::{CrawlerState, CrawlerStateRef};

/// Crawls `root` up to `max_depth` hops over HTTP and returns every
/// discovered address, sorted.
pub async fn crawl_webpage(root: &str, max_depth: usize) -> Result<Vec<String>, CrawlError> {
    let config = CrawlerConfig::new(root).with_max_depth(max_depth);
    let fetcher = HttpFetcher::from_config(&config);
    crawl(Arc::new(config), Arc::new(fetcher), Arc::new(HtmlLinkExtractor::new())).await
}

/// Runs a crawl with fresh state over the given collaborators.
pub async fn crawl(
    config: CrawlerConfigRef,
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<dyn LinkExtractor>,
) -> Result<Vec<String>, CrawlError> {
    let state = Arc::new(CrawlerState::new(&config.root));
    crawl_with_state(state, config, fetcher, extractor).await
}

/// Runs a crawl over caller-provided state, which must be seeded with
/// `config.root`. The state can be inspected afterwards.
///
/// Every address that is new and sits below the depth bound gets its own
/// expansion task. The `JoinSet` is the only owner of those tasks, so the
/// call returns once it has drained, which includes tasks scheduled for
/// addresses found by other tasks.
pub async fn crawl_with_state(
    state: CrawlerStateRef,
    config: CrawlerConfigRef,
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<dyn LinkExtractor>,
) -> Result<Vec<String>, CrawlError> {
    let mut expansions: JoinSet<(usize, Vec<String>)> = JoinSet::new();

    let schedule = |expansions: &mut JoinSet<(usize, Vec<String>)>, address: String, depth: usize| {
        if depth >= config.max_depth {
            trace!("Not expanding {}: depth {} reached bound {}", address, depth, config.max_depth);
            return;
        }
        let state = Arc::clone(&state);
        let fetcher = Arc::clone(&fetcher);
        let extractor = Arc::clone(&extractor);
        expansions.spawn(async move {
            let found = expand(&address, depth, &state, fetcher.as_ref(), extractor.as_ref()).await;
            (depth + 1, found)
        });
    };

    schedule(&mut expansions, config.root.clone(), 0);

    while let Some(joined) = expansions.join_next().await {
        let (depth, found) = joined?;
        for address in found {
            schedule(&mut expansions, address, depth);
        }
    }

    let result = state.sorted_addresses(config.max_depth).await;
    info!(
        "Crawl of {} finished after {:?}: {} addresses discovered, {} pages expanded, {} fetch failures, {} unresolved links",
        config.root,
        state.elapsed(),
        state.len().await,
        state.pages_expanded_count.load(Ordering::Relaxed),
        state.fetch_failures_count.load(Ordering::Relaxed),
        state.resolve_failures_count.load(Ordering::Relaxed),
    );

    Ok(result)
}

/// Fetches `address`, resolves its links against it and registers them one
/// hop deeper. Returns the addresses this call was first to discover.
async fn expand(
    address: &str,
    depth: usize,
    state: &CrawlerState,
    fetcher: &dyn Fetcher,
    extractor: &dyn LinkExtractor,
) -> Vec<String> {
    debug!("Expanding {} at depth {}", address, depth);

    let body = match fetcher.fetch(address).await {
        Ok(body) => body,
        Err(e) => {
            warn!("Error fetching {}: {}", address, e);
            state.record_fetch_failure();
            return Vec::new();
        }
    };
    state.record_expanded();

    let links = extractor.extract(&body);
    let mut resolved = Vec::with_capacity(links.len());
    for link in &links {
        match resolve(address, link) {
            Ok(absolute) => resolved.push(absolute),
            Err(e) => {
                warn!("Error resolving URL {:?} on {}: {}", link, address, e);
                state.record_resolve_failure();
            }
        }
    }

    let found = state
        .register_all(resolved.iter().map(String::as_str), depth + 1)
        .await;
    info!("Found {} links on {} ({} new)", links.len(), address, found.len());
    found
}
