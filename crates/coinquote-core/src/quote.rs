//! Upstream quote document.
//!
//! The CoinMarketCap `quotes/latest` payload is kept untyped: only one path
//! through it is ever read, and an error body (bad key, quota exhausted) must
//! still parse so it can be logged and cached like any other response.
//!
//! ```text
//! { "data": { "<SYMBOL>": { "quote": { "<CURRENCY>": { "price": 12.34 } } } } }
//! ```

use serde_json::Value;

use crate::error::{CoinQuoteError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    raw: Value,
}

impl Quote {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Parse a response body. Only JSON syntax is checked here.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(Self::new(serde_json::from_slice(body)?))
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Whether the document carries a `data` section at all.
    pub fn has_data(&self) -> bool {
        self.raw.get("data").is_some()
    }

    /// Upstream `status.error_message`, when present and non-null.
    pub fn status_message(&self) -> Option<&str> {
        self.raw
            .get("status")
            .and_then(|s| s.get("error_message"))
            .and_then(Value::as_str)
    }

    /// Locate `data.{symbol}.quote.{currency}.price`.
    ///
    /// The price may be a JSON number or a numeric string.
    pub fn price(&self, symbol: &str, currency: &str) -> Result<f64> {
        let data = self
            .raw
            .get("data")
            .ok_or_else(|| CoinQuoteError::DataUnavailable("response has no `data` section".into()))?;
        let entry = data
            .get(symbol)
            .ok_or_else(|| CoinQuoteError::DataUnavailable(format!("symbol {symbol} not in response")))?;
        let quote = entry
            .get("quote")
            .and_then(|q| q.get(currency))
            .ok_or_else(|| {
                CoinQuoteError::DataUnavailable(format!("no {currency} quote for {symbol}"))
            })?;
        let price = quote
            .get("price")
            .ok_or_else(|| CoinQuoteError::DataUnavailable(format!("no price in {symbol}/{currency} quote")))?;

        let value = match price {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        value.ok_or_else(|| {
            CoinQuoteError::DataUnavailable(format!("{symbol}/{currency} price is not numeric: {price}"))
        })
    }
}

impl From<Value> for Quote {
    fn from(raw: Value) -> Self {
        Self::new(raw)
    }
}
