//! Shared quote sources for integration tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use coinquote_core::{CoinQuoteError, Quote, Result};
use coinquote_exporter::upstream::QuoteSource;

pub fn quote_body(symbol: &str, currency: &str, price: f64) -> Value {
    json!({ "data": { symbol: { "quote": { currency: { "price": price } } } } })
}

pub fn no_data_body() -> Value {
    json!({ "status": { "error_code": 1002, "error_message": "API key missing." } })
}

/// Replays scripted responses (the last one repeats) and records every call.
pub struct ScriptedSource {
    script: Mutex<Vec<Result<Value>>>,
    delay: Duration,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(script: Vec<Result<Value>>) -> Self {
        assert!(!script.is_empty());
        Self {
            script: Mutex::new(script),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn ok(body: Value) -> Self {
        Self::new(vec![Ok(body)])
    }

    pub fn failing() -> Self {
        Self::new(vec![Err(CoinQuoteError::Fetch("connection refused".into()))])
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn next(&self) -> Result<Value> {
        let mut script = self.script.lock().unwrap();
        if script.len() > 1 {
            script.remove(0)
        } else {
            script[0].clone()
        }
    }
}

#[async_trait]
impl QuoteSource for ScriptedSource {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn fetch(&self, _symbol: &str) -> Result<Quote> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let res = self.next().map(Quote::new);

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        res
    }
}
