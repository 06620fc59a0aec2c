//! Operational HTTP endpoints.
//!
//! - `/`        : landing text
//! - `/healthz` : liveness
//! - `/metrics` : Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;

const CONTENT_TYPE_TEXT: &str = "text/plain; version=0.0.4; charset=utf-8";

pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let q = &state.cfg().quote;
    (
        StatusCode::OK,
        format!("coinquote exporter ({}/{})\nmetrics: /metrics\n", q.symbol, q.currency),
    )
}

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let collector = state.collector();

    let samples = match collector.collect().await {
        Ok(samples) => samples,
        Err(e) => {
            let kind = e.kind().as_str();
            state.metrics().scrapes.inc(&[("outcome", "error")]);
            state.metrics().scrape_errors.inc(&[("kind", kind)]);
            tracing::warn!(kind, error = %e, "scrape failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                format!("error collecting metrics: {e}\n"),
            )
                .into_response();
        }
    };
    state.metrics().scrapes.inc(&[("outcome", "ok")]);

    let mut body = String::new();
    collector.family(samples).render(&mut body);
    state.metrics().render(state.snapshot().await, &mut body);

    (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE_TEXT)], body).into_response()
}
