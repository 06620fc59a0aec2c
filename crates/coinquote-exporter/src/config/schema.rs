use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use coinquote_core::error::{CoinQuoteError, Result};

pub const ENV_SYMBOL: &str = "SYMBOL";
pub const ENV_CURRENCY: &str = "CURRENCY";
pub const ENV_API_KEY: &str = "COINMARKETCAP_API_KEY";
pub const ENV_CACHE_TTL: &str = "CACHE_TTL";
pub const ENV_CACHE_MAX_SIZE: &str = "CACHE_MAX_SIZE";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub quote: QuoteSection,

    #[serde(default)]
    pub cache: CacheSection,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            server: ServerSection::default(),
            quote: QuoteSection::default(),
            cache: CacheSection::default(),
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(CoinQuoteError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }
        self.server.validate()?;
        self.quote.validate()?;
        self.cache.validate()?;
        Ok(())
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|k| std::env::var(k).ok())
    }

    /// Apply overrides from an arbitrary lookup. Empty values count as unset.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |k: &str| lookup(k).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(ENV_SYMBOL) {
            self.quote.symbol = v.trim().to_string();
        }
        if let Some(v) = get(ENV_CURRENCY) {
            self.quote.currency = v.trim().to_string();
        }
        if let Some(v) = get(ENV_API_KEY) {
            self.quote.api_key = v.trim().to_string();
        }
        if let Some(v) = get(ENV_CACHE_TTL) {
            self.cache.ttl_secs = parse_env_u64(ENV_CACHE_TTL, &v)?;
        }
        if let Some(v) = get(ENV_CACHE_MAX_SIZE) {
            self.cache.max_size = parse_env_u64(ENV_CACHE_MAX_SIZE, &v)?;
        }
        Ok(())
    }
}

fn parse_env_u64(key: &str, v: &str) -> Result<u64> {
    v.trim()
        .parse::<u64>()
        .map_err(|e| CoinQuoteError::Config(format!("{key}={v:?} is not a non-negative integer: {e}")))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_addr")]
    pub addr: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            port: default_port(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.addr.trim().is_empty() {
            return Err(CoinQuoteError::Config("server.addr must not be empty".into()));
        }
        if self.port == 0 {
            return Err(CoinQuoteError::Config("server.port must not be 0".into()));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuoteSection {
    #[serde(default = "default_symbol")]
    pub symbol: String,

    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Outbound request timeout. Unset means wait for the upstream.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for QuoteSection {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            currency: default_currency(),
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

// api_key stays out of logs.
impl fmt::Debug for QuoteSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuoteSection")
            .field("symbol", &self.symbol)
            .field("currency", &self.currency)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl QuoteSection {
    pub fn validate(&self) -> Result<()> {
        validate_code("quote.symbol", &self.symbol)?;
        // Currency ends up inside the sample name, so it must be a valid name fragment.
        validate_code("quote.currency", &self.currency)?;
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(CoinQuoteError::Config(
                "quote.base_url must start with http:// or https://".into(),
            ));
        }
        if self.timeout_secs == Some(0) {
            return Err(CoinQuoteError::Config("quote.timeout_secs must be at least 1".into()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn validate_code(field: &str, v: &str) -> Result<()> {
    if v.is_empty() {
        return Err(CoinQuoteError::Config(format!("{field} must not be empty")));
    }
    if !v.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(CoinQuoteError::Config(format!(
            "{field} must be ascii alphanumeric, got {v:?}"
        )));
    }
    Ok(())
}

/// One year. The cache builder rejects lifetimes of 1000 years or more.
pub const MAX_TTL_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheSection {
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    #[serde(default = "default_max_size")]
    pub max_size: u64,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            max_size: default_max_size(),
        }
    }
}

impl CacheSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_TTL_SECS).contains(&self.ttl_secs) {
            return Err(CoinQuoteError::Config(format!(
                "cache.ttl_secs must be between 1 and {MAX_TTL_SECS}"
            )));
        }
        if self.max_size == 0 {
            return Err(CoinQuoteError::Config("cache.max_size must be at least 1".into()));
        }
        Ok(())
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

fn default_version() -> u32 {
    1
}
fn default_addr() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    9101
}
fn default_symbol() -> String {
    "XCH".into()
}
fn default_currency() -> String {
    "USD".into()
}
fn default_base_url() -> String {
    "https://pro-api.coinmarketcap.com".into()
}
// 50 minutes keeps a single exporter inside the free API tier.
fn default_ttl_secs() -> u64 {
    3000
}
fn default_max_size() -> u64 {
    10000
}
