//! coinquote exporter library entry.
//!
//! Wires config, the upstream client, the cached fetcher, the collector, and
//! the axum metrics server. Consumed by the binary (`main.rs`) and by
//! integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod cache;
pub mod cli;
pub mod collector;
pub mod config;
pub mod fetcher;
pub mod obs;
pub mod ops;
pub mod router;
pub mod upstream;
