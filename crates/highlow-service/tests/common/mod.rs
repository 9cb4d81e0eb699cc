// File: crates/highlow-service/tests/common/mod.rs
// Purpose: In-memory rasterizer/publisher fakes and feed fixtures for the service tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use highlow_core::{EncodeParams, Feed, SceneMarkup};
use highlow_service::publish::{ExpiryPolicy, ObjectKey, PublishedChart, Publisher, UrlPolicy, UrlSigner};
use highlow_service::{PublishError, RasterizeError, Rasterizer};
use serde_json::{json, Value};

pub fn quote(ccy: &str, time: &str, ask: f64, bid: f64) -> Value {
    json!({ "CCY": ccy, "UPDATETIME": time, "ASKLISTRATE": ask, "BIDLISTRATE": bid })
}

/// USD, EUR and JPY sessions on 2020-01-02; no HKD quotes at all.
pub fn mixed_feed() -> Feed {
    let quotes = vec![
        quote("USD", "2020-01-02 09:00:00", 30.0, 29.8),
        quote("EUR", "2020-01-02 09:00:00", 33.6, 33.2),
        quote("JPY", "2020-01-02 09:00:00", 0.281, 0.276),
        quote("USD", "2020-01-02 12:00:00", 30.5, 30.2),
        quote("EUR", "2020-01-02 12:00:00", 33.9, 33.4),
        quote("JPY", "2020-01-02 12:00:00", 0.283, 0.277),
        quote("USD", "2020-01-02 16:00:00", 30.1, 29.85),
        quote("EUR", "2020-01-02 16:00:00", 33.7, 33.3),
        quote("JPY", "2020-01-02 16:00:00", 0.282, 0.276),
    ];
    let body = json!([{ "Date": "2020-01-02", "SpotListRate": quotes }]);
    Feed::from_json(&body.to_string()).expect("fixture feed parses")
}

pub fn codes(list: &[&str]) -> Vec<String> {
    list.iter().map(|c| c.to_string()).collect()
}

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 2).unwrap()
}

pub fn url_policy() -> UrlPolicy {
    UrlPolicy {
        base_url: "https://charts.example.test/highlow/".to_string(),
        signer: UrlSigner::new("test-key"),
        expiry: ExpiryPolicy::NextDay,
    }
}

/// Returns the SVG bytes as the "PNG"; fails or stalls for scenes whose title names `poisoned`.
#[derive(Default)]
pub struct FakeRasterizer {
    pub poisoned: Option<String>,
    pub stall: Option<Duration>,
}

#[async_trait]
impl Rasterizer for FakeRasterizer {
    async fn rasterize(&self, markup: &SceneMarkup, _params: &EncodeParams) -> Result<Vec<u8>, RasterizeError> {
        if let Some(code) = &self.poisoned {
            if markup.svg.contains(&format!("<title>{code} Exchange Rate</title>")) {
                match self.stall {
                    Some(delay) => tokio::time::sleep(delay).await,
                    None => return Err(RasterizeError::EmptyOutput),
                }
            }
        }
        Ok(markup.svg.clone().into_bytes())
    }
}

/// Keeps every published object in memory.
#[derive(Default)]
pub struct MemoryPublisher {
    pub stored: Mutex<Vec<(String, Vec<u8>)>>,
}

#[async_trait]
impl Publisher for MemoryPublisher {
    async fn publish(&self, key: &ObjectKey, png: Vec<u8>, generated_on: NaiveDate) -> Result<PublishedChart, PublishError> {
        self.stored.lock().unwrap().push((key.to_string(), png));
        url_policy().published(key, generated_on)
    }
}

pub fn memory_publisher() -> Arc<MemoryPublisher> {
    Arc::new(MemoryPublisher::default())
}
