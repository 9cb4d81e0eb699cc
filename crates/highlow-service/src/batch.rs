// File: crates/highlow-service/src/batch.rs
// Summary: Per-code chart pipeline fan-out and the ordered batch report.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use highlow_core::{build_scene, EncodeParams, Feed, RenderOptions};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{ChartFailure, PublishError};
use crate::publish::{self, ObjectKey, PublishedChart, Publisher};
use crate::raster::{self, Rasterizer};

/// Everything one code needs to go from feed to published URL.
#[derive(Clone)]
pub struct Pipeline {
    pub rasterizer: Arc<dyn Rasterizer>,
    pub publisher: Arc<dyn Publisher>,
    pub render: RenderOptions,
    pub encode: EncodeParams,
    /// Budget for rasterize + publish of a single code.
    pub timeout: Duration,
}

impl Pipeline {
    pub fn new(rasterizer: Arc<dyn Rasterizer>, publisher: Arc<dyn Publisher>) -> Self {
        Self {
            rasterizer,
            publisher,
            render: RenderOptions::default(),
            encode: EncodeParams::default(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, PublishError> {
        let mut pipeline = Self::new(raster::from_config(&config.rasterizer), publish::from_config(&config.publisher)?);
        pipeline.render.legend = config.batch.legend;
        pipeline.timeout = config.batch.timeout();
        Ok(pipeline)
    }

    /// Run every code concurrently. Results keep the order of `codes`; duplicates run once.
    pub async fn run(&self, feed: Arc<Feed>, codes: &[String], generated_on: NaiveDate) -> BatchReport {
        let mut handles = IndexMap::new();
        for code in codes {
            if handles.contains_key(code) {
                continue;
            }
            let pipeline = self.clone();
            let feed = Arc::clone(&feed);
            let task_code = code.clone();
            let handle = tokio::spawn(async move { pipeline.run_code(&feed, &task_code, generated_on).await });
            handles.insert(code.clone(), handle);
        }

        let mut results = IndexMap::with_capacity(handles.len());
        for (code, handle) in handles {
            let outcome = handle.await.unwrap_or_else(|e| Err(ChartFailure::Aborted(e.to_string())));
            match &outcome {
                Ok(chart) => info!(%code, key = %chart.key, "chart published"),
                Err(e) => warn!(%code, kind = e.kind(), error = %e, "chart failed"),
            }
            results.insert(code, outcome);
        }
        BatchReport { generated_on, results }
    }

    pub async fn run_code(&self, feed: &Feed, code: &str, generated_on: NaiveDate) -> Result<PublishedChart, ChartFailure> {
        info!(%code, "building chart");
        let markup = build_scene(feed, code, &self.render)?.to_markup();
        let key = ObjectKey::for_chart(code, generated_on)?;

        let external = async {
            let png = self.rasterizer.rasterize(&markup, &self.encode).await?;
            tracing::debug!(%code, bytes = png.len(), "chart rasterized");
            let published = self.publisher.publish(&key, png, generated_on).await?;
            Ok::<_, ChartFailure>(published)
        };
        tokio::time::timeout(self.timeout, external)
            .await
            .map_err(|_| ChartFailure::Timeout(self.timeout))?
    }
}

/// Outcome of one batch, keyed by currency code in request order.
#[derive(Debug)]
pub struct BatchReport {
    pub generated_on: NaiveDate,
    pub results: IndexMap<String, Result<PublishedChart, ChartFailure>>,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Entry<'a> {
    Published {
        #[serde(flatten)]
        chart: &'a PublishedChart,
    },
    Failed {
        kind: &'static str,
        reason: String,
    },
}

impl BatchReport {
    pub fn failures(&self) -> impl Iterator<Item = (&str, &ChartFailure)> {
        self.results
            .iter()
            .filter_map(|(code, outcome)| outcome.as_ref().err().map(|e| (code.as_str(), e)))
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    /// `{ CODE: { "status": "published", .. } | { "status": "failed", "kind", "reason" } }`.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        let entries: IndexMap<&str, Entry<'_>> = self
            .results
            .iter()
            .map(|(code, outcome)| {
                let entry = match outcome {
                    Ok(chart) => Entry::Published { chart },
                    Err(e) => Entry::Failed { kind: e.kind(), reason: e.to_string() },
                };
                (code.as_str(), entry)
            })
            .collect();
        serde_json::to_value(entries)
    }
}
