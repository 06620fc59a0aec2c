//! CoinMarketCap `quotes/latest` client.
//!
//! Status codes are not inspected. Upstream error bodies are JSON too, and the
//! fetcher decides what a body without `data` means.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use coinquote_core::error::{CoinQuoteError, Result};
use coinquote_core::Quote;

use crate::config::QuoteSection;
use crate::upstream::QuoteSource;

const QUOTES_LATEST_PATH: &str = "/v1/cryptocurrency/quotes/latest";
const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

pub struct CoinMarketCapClient {
    client: Client,
    url: String,
    api_key: String,
}

impl CoinMarketCapClient {
    pub fn new(cfg: &QuoteSection) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = cfg.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CoinQuoteError::Internal(format!("http client build failed: {e}")))?;

        Ok(Self {
            client,
            url: format!("{}{}", cfg.base_url.trim_end_matches('/'), QUOTES_LATEST_PATH),
            api_key: cfg.api_key.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl QuoteSource for CoinMarketCapClient {
    fn name(&self) -> &'static str {
        "coinmarketcap"
    }

    async fn fetch(&self, symbol: &str) -> Result<Quote> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("symbol", symbol)])
            .header("Accepts", "application/json")
            .header(API_KEY_HEADER, self.api_key.as_str())
            .send()
            .await
            .map_err(|e| CoinQuoteError::Fetch(format!("GET {} failed: {e}", self.url)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| CoinQuoteError::Fetch(format!("reading response body failed: {e}")))?;

        debug!(%status, bytes = body.len(), symbol, "upstream responded");
        Quote::from_slice(&body)
    }
}
