//! Cached quote fetcher.
//!
//! Owns the cache for one configured symbol and the upstream source behind it.
//! A body without a `data` section is logged, cached, and returned like any
//! other; deciding that it is unusable is the collector's job.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info};

use coinquote_core::{Quote, Result};

use crate::cache::QuoteCache;
use crate::config::CacheSection;
use crate::upstream::QuoteSource;

pub struct QuoteFetcher {
    source: Arc<dyn QuoteSource>,
    symbol: String,
    cache: QuoteCache,
    upstream_requests: AtomicU64,
}

impl QuoteFetcher {
    pub fn new(source: Arc<dyn QuoteSource>, symbol: impl Into<String>, cfg: &CacheSection) -> Self {
        Self::with_cache(source, symbol, QuoteCache::new(cfg))
    }

    pub fn with_cache(source: Arc<dyn QuoteSource>, symbol: impl Into<String>, cache: QuoteCache) -> Self {
        Self {
            source,
            symbol: symbol.into(),
            cache,
            upstream_requests: AtomicU64::new(0),
        }
    }

    /// Cached quote for the configured symbol, fetching on miss or expiry.
    pub async fn quote(&self) -> Result<Arc<Quote>> {
        self.cache.get_or_load(&self.symbol, self.load()).await
    }

    async fn load(&self) -> Result<Arc<Quote>> {
        self.upstream_requests.fetch_add(1, Ordering::Relaxed);
        info!(symbol = %self.symbol, source = self.source.name(), "fetching quote from upstream");

        let quote = self.source.fetch(&self.symbol).await?;
        if !quote.has_data() {
            error!(
                symbol = %self.symbol,
                upstream_status = quote.status_message().unwrap_or("-"),
                "No data in response. Is your API key set?"
            );
        }
        Ok(Arc::new(quote))
    }

    /// Upstream calls issued so far, failed ones included.
    pub fn upstream_requests(&self) -> u64 {
        self.upstream_requests.load(Ordering::Relaxed)
    }

    pub async fn cached_entries(&self) -> u64 {
        self.cache.entry_count().await
    }

    /// Drop the cached quote so the next call goes upstream.
    pub fn invalidate(&self) {
        self.cache.invalidate_all();
    }
}
