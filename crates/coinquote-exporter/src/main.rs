//! coinquote exporter
//!
//! Serves `/metrics` with the configured CoinMarketCap quote as a gauge.
//! Runs until interrupted; Ctrl-C or SIGTERM exits with status 0.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use coinquote_core::error::{CoinQuoteError, Result};
use coinquote_exporter::{app_state, cli::Args, router};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "coinquote-exporter failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let cfg = args.resolve()?;
    if cfg.quote.api_key.is_empty() {
        tracing::warn!("COINMARKETCAP_API_KEY is not set; upstream will reject requests");
    }

    let addr = cfg.server.addr.clone();
    let port = cfg.server.port;
    tracing::info!(quote = ?cfg.quote, cache = ?cfg.cache, "config loaded");

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind((addr.as_str(), port))
        .await
        .map_err(|e| CoinQuoteError::Config(format!("bind {addr}:{port} failed: {e}")))?;
    tracing::info!("listening on http://{addr}:{port}/metrics");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CoinQuoteError::Internal(format!("server failed: {e}")))?;

    tracing::info!("interrupted, shutting down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
