//! Quote collector: turns the cached quote into the `coin_market_quote` gauge.
//!
//! One `collect()` runs at a time. Concurrent scrapes queue on the collector's
//! mutex, so fetch and extraction behave as a single critical section.

use std::sync::Arc;

use tokio::sync::Mutex;

use coinquote_core::{MetricFamily, MetricSample, Result};

use crate::fetcher::QuoteFetcher;

pub const FAMILY_NAME: &str = "coin_market_quote";
const FAMILY_HELP: &str = "coinmarketcap quote";

pub struct QuoteCollector {
    fetcher: Arc<QuoteFetcher>,
    symbol: String,
    currency: String,
    lock: Mutex<()>,
}

impl QuoteCollector {
    pub fn new(fetcher: Arc<QuoteFetcher>, symbol: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            fetcher,
            symbol: symbol.into(),
            currency: currency.into(),
            lock: Mutex::new(()),
        }
    }

    /// Sample name, e.g. `coin_market_quote_USD`.
    pub fn sample_name(&self) -> String {
        format!("{}_{}", FAMILY_NAME, self.currency)
    }

    /// Fetch (or reuse) the quote and extract the configured price.
    ///
    /// Fails with `DataUnavailable` when the document lacks the
    /// `data.{symbol}.quote.{currency}.price` path; nothing is emitted then.
    pub async fn collect(&self) -> Result<Vec<MetricSample>> {
        let _guard = self.lock.lock().await;

        let quote = self.fetcher.quote().await?;
        let price = quote.price(&self.symbol, &self.currency)?;

        Ok(vec![
            MetricSample::new(self.sample_name(), price).with_label("symbol", self.symbol.as_str())
        ])
    }

    pub fn family(&self, samples: Vec<MetricSample>) -> MetricFamily {
        MetricFamily::gauge(FAMILY_NAME, FAMILY_HELP, samples)
    }

    pub fn fetcher(&self) -> &QuoteFetcher {
        &self.fetcher
    }
}
