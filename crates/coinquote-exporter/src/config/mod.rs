//! Exporter config loader (strict parsing).
//!
//! Precedence, lowest first: built-in defaults, the YAML file, environment
//! variables, command-line flags. Validation runs once everything is applied.

pub mod schema;

use std::fs;

use coinquote_core::error::{CoinQuoteError, Result};

pub use schema::{CacheSection, ExporterConfig, QuoteSection, ServerSection};

pub fn load_from_file(path: &str) -> Result<ExporterConfig> {
    let cfg = parse_file(path)?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let cfg = parse_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Parse without validating, so later layers can still fill gaps.
pub fn parse_file(path: &str) -> Result<ExporterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| CoinQuoteError::Config(format!("read config {path} failed: {e}")))?;
    parse_str(&s)
}

pub fn parse_str(s: &str) -> Result<ExporterConfig> {
    serde_yaml::from_str(s).map_err(|e| CoinQuoteError::Config(format!("invalid yaml: {e}")))
}
