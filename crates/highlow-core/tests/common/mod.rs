// File: crates/highlow-core/tests/common/mod.rs
// Purpose: Feed fixtures shared by the core integration tests.
#![allow(dead_code)]

use highlow_core::Feed;
use serde_json::{json, Value};

pub fn quote(ccy: &str, time: &str, ask: f64, bid: f64) -> Value {
    json!({
        "CCY": ccy,
        "UPDATETIME": time,
        "ASKLISTRATE": ask,
        "BIDLISTRATE": bid,
        "CCYNAME": "ignored",
    })
}

pub fn feed(buckets: Vec<Vec<Value>>) -> Feed {
    let body = Value::Array(
        buckets
            .into_iter()
            .map(|quotes| json!({ "SpotListRate": quotes }))
            .collect(),
    );
    Feed::from_json(&body.to_string()).expect("fixture feed parses")
}

/// Seven USD quotes from 08:00 to 16:00, ask within [30.0, 30.5], bid within [29.8, 30.2].
pub fn usd_session() -> Feed {
    feed(vec![vec![
        quote("USD", "2020-01-02 08:00:00", 30.0, 29.8),
        quote("USD", "2020-01-02 09:20:00", 30.1, 29.9),
        quote("USD", "2020-01-02 10:40:00", 30.5, 30.2),
        quote("USD", "2020-01-02 12:00:00", 30.3, 30.0),
        quote("USD", "2020-01-02 13:20:00", 30.2, 29.9),
        quote("USD", "2020-01-02 14:40:00", 30.4, 30.1),
        quote("USD", "2020-01-02 16:00:00", 30.1, 29.85),
    ]])
}

pub fn assert_close(got: f64, want: f64) {
    assert!((got - want).abs() < 1e-9, "expected {want}, got {got}");
}
