//! JSON test vector loader shared by quote tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct QuoteVector {
    pub description: String,
    pub symbol: String,
    pub currency: String,
    pub response: serde_json::Value,
    #[serde(default)]
    pub expect_price: Option<f64>,
    #[serde(default)]
    pub expect_error: Option<ExpectError>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectError {
    pub kind: String,
}

pub fn load(name: &str) -> QuoteVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

#[allow(dead_code)]
pub fn load_raw(name: &str) -> Vec<u8> {
    let v = load(name);
    serde_json::to_vec(&v.response).unwrap()
}
