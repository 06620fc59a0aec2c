//! coinquote core: the quote document, metric sample types, and the shared
//! error surface.
//!
//! Nothing here knows about HTTP, caching, or the runtime. The exporter crate
//! owns those concerns and hands raw upstream JSON to [`quote::Quote`].
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! A malformed upstream document must surface as `CoinQuoteError`, never as a
//! crashed scrape task.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod quote;
pub mod sample;

/// Shared result type.
pub use error::{CoinQuoteError, ErrorKind, Result};
pub use quote::Quote;
pub use sample::{MetricFamily, MetricSample, MetricType};
