//! Bounded TTL cache for upstream quotes.
//!
//! Backed by `moka`: expiry is checked on read, capacity overflow evicts the
//! least-recently-used entry, and concurrent misses on one key share a single
//! load. Failed loads are never stored.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use moka::policy::EvictionPolicy;

use coinquote_core::{Quote, Result};

use crate::config::CacheSection;

pub struct QuoteCache {
    inner: Cache<String, Arc<Quote>>,
    max_size: u64,
}

impl QuoteCache {
    pub fn new(cfg: &CacheSection) -> Self {
        Self::with_ttl(cfg.ttl(), cfg.max_size)
    }

    pub fn with_ttl(ttl: Duration, max_size: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_size)
            .time_to_live(ttl)
            .eviction_policy(EvictionPolicy::lru())
            .build();
        Self { inner, max_size }
    }

    /// Return the live entry for `key`, or run `load` and store its result.
    ///
    /// Callers arriving while a load for the same key is in flight wait for it
    /// instead of starting their own.
    pub async fn get_or_load<F>(&self, key: &str, load: F) -> Result<Arc<Quote>>
    where
        F: Future<Output = Result<Arc<Quote>>>,
    {
        self.inner
            .try_get_with_by_ref(key, load)
            .await
            .map_err(|e| (*e).clone())
    }

    pub async fn get(&self, key: &str) -> Option<Arc<Quote>> {
        self.inner.get(key).await
    }

    pub async fn insert(&self, key: &str, quote: Arc<Quote>) {
        self.inner.insert(key.to_string(), quote).await;
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }

    /// Entry count after flushing pending maintenance (evictions, expiries).
    pub async fn entry_count(&self) -> u64 {
        self.inner.run_pending_tasks().await;
        self.inner.entry_count()
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }
}
