//! Exporter self-metrics.
//!
//! Rendered after the quote family on `/metrics`, in the same text format.

pub mod metrics;

pub use metrics::ExporterMetrics;
