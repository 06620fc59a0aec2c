#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use coinquote_exporter::config::{self, ExporterConfig};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
quote:
  symbol: "XCH"
  ttl: 10 # belongs under cache
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "config");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.server.addr, "0.0.0.0");
    assert_eq!(cfg.server.port, 9101);
    assert_eq!(cfg.quote.symbol, "XCH");
    assert_eq!(cfg.quote.currency, "USD");
    assert_eq!(cfg.quote.base_url, "https://pro-api.coinmarketcap.com");
    assert!(cfg.quote.timeout_secs.is_none());
    assert_eq!(cfg.cache.ttl_secs, 3000);
    assert_eq!(cfg.cache.max_size, 10000);
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
server: { addr: "127.0.0.1", port: 9200 }
quote:
  symbol: BTC
  currency: EUR
  api_key: "abc-123"
  base_url: "http://localhost:8080"
  timeout_secs: 5
cache: { ttl_secs: 60, max_size: 4 }
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.port, 9200);
    assert_eq!(cfg.quote.symbol, "BTC");
    assert_eq!(cfg.quote.timeout_secs, Some(5));
    assert_eq!(cfg.cache.max_size, 4);
}

#[test]
fn rejects_bad_values() {
    let cases = [
        "version: 2\n",
        "cache: { ttl_secs: 0 }\n",
        "cache: { ttl_secs: 99999999999 }\n",
        "cache: { ttl_secs: 31536001 }\n",
        "cache: { max_size: 0 }\n",
        "server: { port: 0 }\n",
        "quote: { currency: \"US-D\" }\n",
        "quote: { symbol: \"\" }\n",
        "quote: { base_url: \"ftp://example.com\" }\n",
        "quote: { timeout_secs: 0 }\n",
    ];
    for c in cases {
        let err = config::load_from_str(c).expect_err(c);
        assert_eq!(err.kind().as_str(), "config", "case={c}");
    }
}

#[test]
fn env_overrides_file_values() {
    let mut cfg = config::parse_str("quote: { symbol: BTC, currency: EUR }\n").unwrap();
    let env: HashMap<&str, &str> = HashMap::from([
        ("SYMBOL", "ETH"),
        ("CURRENCY", "USD"),
        ("COINMARKETCAP_API_KEY", "secret"),
        ("CACHE_TTL", "120"),
        ("CACHE_MAX_SIZE", "8"),
    ]);
    cfg.apply_env_from(|k| env.get(k).map(|v| v.to_string())).unwrap();
    cfg.validate().unwrap();

    assert_eq!(cfg.quote.symbol, "ETH");
    assert_eq!(cfg.quote.currency, "USD");
    assert_eq!(cfg.quote.api_key, "secret");
    assert_eq!(cfg.cache.ttl_secs, 120);
    assert_eq!(cfg.cache.max_size, 8);
}

#[test]
fn empty_env_values_are_ignored() {
    let mut cfg = ExporterConfig::default();
    cfg.apply_env_from(|k| (k == "SYMBOL").then(|| "  ".to_string())).unwrap();
    assert_eq!(cfg.quote.symbol, "XCH");
}

#[test]
fn oversized_env_ttl_fails_validation_instead_of_panicking() {
    let mut cfg = ExporterConfig::default();
    cfg.apply_env_from(|k| (k == "CACHE_TTL").then(|| "99999999999".to_string()))
        .unwrap();
    let err = cfg.validate().unwrap_err();
    assert_eq!(err.kind().as_str(), "config");
}

#[test]
fn one_year_ttl_builds_app_state() {
    let mut cfg = ExporterConfig::default();
    cfg.cache.ttl_secs = coinquote_exporter::config::schema::MAX_TTL_SECS;
    cfg.validate().unwrap();
    coinquote_exporter::app_state::AppState::new(cfg).unwrap();
}

#[test]
fn non_numeric_env_is_config_error() {
    let mut cfg = ExporterConfig::default();
    let err = cfg
        .apply_env_from(|k| (k == "CACHE_TTL").then(|| "fifty".to_string()))
        .unwrap_err();
    assert_eq!(err.kind().as_str(), "config");
}

#[test]
fn debug_output_hides_api_key() {
    let mut cfg = ExporterConfig::default();
    cfg.quote.api_key = "super-secret-key".into();
    let dbg = format!("{:?}", cfg);
    assert!(!dbg.contains("super-secret-key"));
    assert!(dbg.contains("<redacted>"));
}

#[test]
fn example_config_parses() {
    let cfg = config::load_from_file("../../coinquote.example.yaml").expect("example must parse");
    assert_eq!(cfg.quote.symbol, "XCH");
    assert_eq!(cfg.cache.ttl_secs, 3000);
}

#[test]
fn missing_file_is_config_error() {
    let err = config::load_from_file("does-not-exist.yaml").unwrap_err();
    assert_eq!(err.kind().as_str(), "config");
}
