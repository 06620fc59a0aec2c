//! Shared application state for the exporter.
//!
//! Owns the fetcher (and its cache), the collector (and its lock), and the
//! self-metrics registry. Cloned into every axum handler.

use std::sync::Arc;

use coinquote_core::error::Result;

use crate::collector::QuoteCollector;
use crate::config::ExporterConfig;
use crate::fetcher::QuoteFetcher;
use crate::obs::metrics::Snapshot;
use crate::obs::ExporterMetrics;
use crate::upstream::{CoinMarketCapClient, QuoteSource};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    collector: Arc<QuoteCollector>,
    metrics: ExporterMetrics,
}

impl AppState {
    /// Build state backed by the CoinMarketCap client.
    pub fn new(cfg: ExporterConfig) -> Result<Self> {
        let source = Arc::new(CoinMarketCapClient::new(&cfg.quote)?);
        Ok(Self::with_source(cfg, source))
    }

    /// Build state around any quote source.
    pub fn with_source(cfg: ExporterConfig, source: Arc<dyn QuoteSource>) -> Self {
        let fetcher = Arc::new(QuoteFetcher::new(source, cfg.quote.symbol.clone(), &cfg.cache));
        let collector = Arc::new(QuoteCollector::new(
            fetcher,
            cfg.quote.symbol.clone(),
            cfg.quote.currency.clone(),
        ));

        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                collector,
                metrics: ExporterMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn collector(&self) -> Arc<QuoteCollector> {
        Arc::clone(&self.inner.collector)
    }

    pub fn metrics(&self) -> &ExporterMetrics {
        &self.inner.metrics
    }

    pub async fn snapshot(&self) -> Snapshot {
        let fetcher = self.inner.collector.fetcher();
        Snapshot {
            upstream_requests: fetcher.upstream_requests(),
            cache_entries: fetcher.cached_entries().await,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_collector_and_metrics() {
        let state = AppState::new(ExporterConfig::default()).unwrap();
        let other = state.clone();

        state.metrics().scrape_errors.inc(&[("kind", "fetch")]);

        assert_eq!(other.metrics().scrape_errors.get(&[("kind", "fetch")]), 1);
        assert!(Arc::ptr_eq(&state.collector(), &other.collector()));
    }
}
