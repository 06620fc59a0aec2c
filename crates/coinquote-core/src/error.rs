//! Shared error type across coinquote crates.

use thiserror::Error;

/// Stable error classification.
///
/// Used as the `kind` label on the scrape error counter, so the strings
/// returned by [`ErrorKind::as_str`] are part of the exported surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid or out-of-range configuration.
    Config,
    /// Outbound HTTP call failed (connect, TLS, body read).
    Fetch,
    /// Upstream body was not valid JSON.
    Parse,
    /// The quote document lacks the field the collector needs.
    DataUnavailable,
    /// Anything else.
    Internal,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Config => "config",
            ErrorKind::Fetch => "fetch",
            ErrorKind::Parse => "parse",
            ErrorKind::DataUnavailable => "data_unavailable",
            ErrorKind::Internal => "internal",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, CoinQuoteError>;

/// Unified error type used by core and exporter.
///
/// Variants carry rendered messages rather than sources: the quote cache hands
/// one error to every waiter of a coalesced fetch, which needs `Clone`.
#[derive(Debug, Clone, Error)]
pub enum CoinQuoteError {
    #[error("config: {0}")]
    Config(String),
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("invalid json: {0}")]
    Parse(String),
    #[error("data unavailable: {0}")]
    DataUnavailable(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl CoinQuoteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoinQuoteError::Config(_) => ErrorKind::Config,
            CoinQuoteError::Fetch(_) => ErrorKind::Fetch,
            CoinQuoteError::Parse(_) => ErrorKind::Parse,
            CoinQuoteError::DataUnavailable(_) => ErrorKind::DataUnavailable,
            CoinQuoteError::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<serde_json::Error> for CoinQuoteError {
    fn from(e: serde_json::Error) -> Self {
        CoinQuoteError::Parse(e.to_string())
    }
}
