use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Shared state of a single crawl call
pub struct CrawlerState {
    /// Address -> depth at which it was first discovered
    visited: Mutex<HashMap<String, usize>>,
    /// Number of pages fetched and parsed
    pub pages_expanded_count: AtomicUsize,
    /// Number of pages whose fetch failed
    pub fetch_failures_count: AtomicUsize,
    /// Number of hrefs that could not be resolved
    pub resolve_failures_count: AtomicUsize,
    started: Instant,
}

impl CrawlerState {
    pub fn new(root: &str) -> Self {
        let mut visited = HashMap::new();
        visited.insert(root.to_string(), 0);

        Self {
            visited: Mutex::new(visited),
            pages_expanded_count: AtomicUsize::new(0),
            fetch_failures_count: AtomicUsize::new(0),
            resolve_failures_count: AtomicUsize::new(0),
            started: Instant::now(),
        }
    }

    /// Registers every address in `addresses` at `depth` unless it is
    /// already known, returning the ones that were new, in input order.
    ///
    /// Membership check and insertion happen under one lock acquisition, so
    /// concurrent discoveries of the same address elect exactly one winner
    /// and the stored depth is never overwritten.
    pub async fn register_all<'a, I>(&self, addresses: I, depth: usize) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut visited = self.visited.lock().await;
        let mut fresh = Vec::new();
        for address in addresses {
            if !visited.contains_key(address) {
                visited.insert(address.to_string(), depth);
                fresh.push(address.to_string());
            }
        }
        fresh
    }

    /// Depth recorded for `address`, if it has been discovered
    pub async fn depth_of(&self, address: &str) -> Option<usize> {
        self.visited.lock().await.get(address).copied()
    }

    pub async fn len(&self) -> usize {
        self.visited.lock().await.len()
    }

    /// Sorted addresses recorded within `max_depth` hops.
    ///
    /// A result with fewer than two addresses collapses to an empty list.
    pub async fn sorted_addresses(&self, max_depth: usize) -> Vec<String> {
        let visited = self.visited.lock().await;
        let mut result: Vec<String> = visited
            .iter()
            .filter(|(_, depth)| **depth <= max_depth)
            .map(|(address, _)| address.clone())
            .collect();

        if result.len() <= 1 {
            return Vec::new();
        }

        result.sort();
        result
    }

    /// Time since this state was created
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn record_expanded(&self) {
        self.pages_expanded_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fetch_failure(&self) {
        self.fetch_failures_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_resolve_failure(&self) {
        self.resolve_failures_count.fetch_add(1, Ordering::Relaxed);
    }
}

pub type CrawlerStateRef = Arc<CrawlerState>;
