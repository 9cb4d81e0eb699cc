// File: crates/highlow-service/src/error.rs
// Summary: Rasterize, publish and per-code failure types surfaced in the batch report.

use std::process::ExitStatus;
use std::time::Duration;

use highlow_core::ChartError;
use highlow_render_skia::RasterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterizeError {
    #[error("failed to start rasterizer `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("rasterizer pipe I/O failed")]
    Io(#[from] std::io::Error),
    #[error("rasterizer exited with {status}: {stderr}")]
    Exit { status: ExitStatus, stderr: String },
    #[error("rasterizer produced no output")]
    EmptyOutput,
    #[error(transparent)]
    Skia(#[from] RasterError),
    #[error("rasterizer task did not complete: {0}")]
    Join(String),
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("storage write failed for `{key}`")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("upload request failed")]
    Http(#[from] reqwest::Error),
    #[error("upload rejected with HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid object key component `{0}`")]
    Key(String),
    #[error("url signing key rejected")]
    Signing,
    #[error("publisher misconfigured: {0}")]
    Misconfigured(String),
}

/// Why one currency produced no published chart.
#[derive(Debug, Error)]
pub enum ChartFailure {
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error(transparent)]
    Rasterize(#[from] RasterizeError),
    #[error(transparent)]
    Publish(#[from] PublishError),
    #[error("rasterize and publish exceeded {0:?}")]
    Timeout(Duration),
    #[error("chart task aborted: {0}")]
    Aborted(String),
}

impl ChartFailure {
    /// Stable machine-readable tag written into the report.
    pub fn kind(&self) -> &'static str {
        match self {
            ChartFailure::Chart(e) => e.kind(),
            ChartFailure::Rasterize(_) => "rasterize",
            ChartFailure::Publish(_) => "publish",
            ChartFailure::Timeout(_) => "timeout",
            ChartFailure::Aborted(_) => "aborted",
        }
    }
}
