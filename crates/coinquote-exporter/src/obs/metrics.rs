//! Minimal metrics registry for the exporter's own health.
//!
//! Counters with dynamic labels backed by `DashMap`. Labels are flattened
//! into sorted key vectors to keep deterministic ordering.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use coinquote_core::sample::{escape_label, format_value};

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self.map.entry(label_key(labels)).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} counter", name);
        let mut rows: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| (label_str(r.key()), r.value().load(Ordering::Relaxed)))
            .collect();
        rows.sort();
        for (labels, val) in rows {
            let _ = writeln!(out, "{}{{{}}} {}", name, labels, val);
        }
    }
}

fn label_key(labels: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

fn label_str(key: &[(String, String)]) -> String {
    key.iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect::<Vec<_>>()
        .join(",")
}

/// Point-in-time values owned by other components, sampled per scrape.
#[derive(Debug, Default, Clone, Copy)]
pub struct Snapshot {
    pub upstream_requests: u64,
    pub cache_entries: u64,
}

#[derive(Default)]
pub struct ExporterMetrics {
    pub scrapes: CounterVec,
    pub scrape_errors: CounterVec,
}

impl ExporterMetrics {
    /// Append all exporter metrics to `out`.
    pub fn render(&self, snap: Snapshot, out: &mut String) {
        self.scrapes.render("coinquote_scrapes_total", "scrapes served by outcome", out);
        self.scrape_errors
            .render("coinquote_scrape_errors_total", "failed scrapes by error kind", out);

        let _ = writeln!(
            out,
            "# HELP coinquote_upstream_requests_total upstream quote requests issued\n\
             # TYPE coinquote_upstream_requests_total counter\n\
             coinquote_upstream_requests_total {}",
            snap.upstream_requests
        );
        let _ = writeln!(
            out,
            "# HELP coinquote_cache_entries live quote cache entries\n\
             # TYPE coinquote_cache_entries gauge\n\
             coinquote_cache_entries {}",
            format_value(snap.cache_entries as f64)
        );
    }
}
