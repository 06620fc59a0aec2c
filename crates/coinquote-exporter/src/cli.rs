//! Command-line flags and config resolution.

use clap::Parser;

use coinquote_core::error::Result;

use crate::config::{self, ExporterConfig};

#[derive(Debug, Parser)]
#[command(name = "coinquote-exporter", version, about = "Expose a CoinMarketCap quote as a Prometheus gauge")]
pub struct Args {
    /// YAML config file. Defaults apply when omitted.
    #[arg(long)]
    pub config: Option<String>,

    /// The interface to bind to.
    #[arg(long)]
    pub addr: Option<String>,

    /// The TCP port to listen on.
    #[arg(long)]
    pub port: Option<u16>,
}

impl Args {
    /// Defaults, then the file, then the environment, then flags; validated last.
    pub fn resolve(&self) -> Result<ExporterConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::parse_file(path)?,
            None => ExporterConfig::default(),
        };
        cfg.apply_env()?;
        self.apply(&mut cfg);
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn apply(&self, cfg: &mut ExporterConfig) {
        if let Some(addr) = &self.addr {
            cfg.server.addr = addr.clone();
        }
        if let Some(port) = self.port {
            cfg.server.port = port;
        }
    }
}
