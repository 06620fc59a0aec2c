//! Outbound quote sources.
//!
//! The cached fetcher only sees [`QuoteSource`]; the CoinMarketCap client is
//! the one production implementation.

pub mod coinmarketcap;

use async_trait::async_trait;

use coinquote_core::{Quote, Result};

pub use coinmarketcap::CoinMarketCapClient;

/// One uncached upstream lookup for a symbol.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    async fn fetch(&self, symbol: &str) -> Result<Quote>;
}
