// File: crates/highlow-service/src/raster.rs
// Summary: Rasterizer port with an in-process Skia backend and an ImageMagick `convert` backend.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;

use async_trait::async_trait;
use highlow_core::{EncodeParams, SceneMarkup};
use highlow_render_skia::SkiaRasterizer;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::config::{RasterizerConfig, RasterizerKind};
use crate::error::RasterizeError;

#[async_trait]
pub trait Rasterizer: Send + Sync + 'static {
    /// Turn scene markup into PNG bytes.
    async fn rasterize(&self, markup: &SceneMarkup, params: &EncodeParams) -> Result<Vec<u8>, RasterizeError>;
}

pub fn from_config(config: &RasterizerConfig) -> Arc<dyn Rasterizer> {
    match config.kind {
        RasterizerKind::Skia => Arc::new(SkiaBackend::default()),
        RasterizerKind::Convert => Arc::new(ConvertRasterizer::new(config.program.clone())),
    }
}

#[derive(Clone, Default)]
pub struct SkiaBackend {
    inner: Arc<SkiaRasterizer>,
}

#[async_trait]
impl Rasterizer for SkiaBackend {
    async fn rasterize(&self, markup: &SceneMarkup, params: &EncodeParams) -> Result<Vec<u8>, RasterizeError> {
        let inner = Arc::clone(&self.inner);
        let markup = markup.clone();
        let params = *params;
        // Skia painting is CPU-bound; keep it off the runtime workers.
        tokio::task::spawn_blocking(move || inner.rasterize(&markup, &params))
            .await
            .map_err(|e| RasterizeError::Join(e.to_string()))?
            .map_err(RasterizeError::from)
    }
}

/// Pipes the markup through `convert svg: png:-`.
#[derive(Clone, Debug)]
pub struct ConvertRasterizer {
    program: PathBuf,
}

impl ConvertRasterizer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }
}

/// Command line for `convert`, reading SVG on stdin and writing PNG on stdout.
pub fn convert_args(params: &EncodeParams) -> Vec<String> {
    vec![
        "-density".into(),
        params.density.to_string(),
        "-quality".into(),
        params.quality.to_string(),
        "-define".into(),
        format!("png:compression-level={}", params.compression_level),
        "-define".into(),
        format!("png:compression-filter={}", params.compression_filter),
        "-define".into(),
        format!("png:compression-strategy={}", params.compression_strategy),
        "-depth".into(),
        params.depth.to_string(),
        "svg:".into(),
        "png:-".into(),
    ]
}

#[async_trait]
impl Rasterizer for ConvertRasterizer {
    async fn rasterize(&self, markup: &SceneMarkup, params: &EncodeParams) -> Result<Vec<u8>, RasterizeError> {
        let mut child = Command::new(&self.program)
            .args(convert_args(params))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RasterizeError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        // stdin is written concurrently with draining stdout.
        let feeder = child.stdin.take().map(|mut stdin| {
            let svg = markup.svg.clone().into_bytes();
            tokio::spawn(async move {
                stdin.write_all(&svg).await?;
                stdin.shutdown().await
            })
        });

        let output = child.wait_with_output().await?;
        let fed = match feeder {
            Some(feeder) => feeder.await.map_err(|e| RasterizeError::Join(e.to_string()))?,
            None => Ok(()),
        };

        // Exit status takes precedence over a broken stdin pipe.
        if !output.status.success() {
            return Err(RasterizeError::Exit {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        fed?;
        if output.stdout.is_empty() {
            return Err(RasterizeError::EmptyOutput);
        }
        tracing::debug!(bytes = output.stdout.len(), "convert finished");
        Ok(output.stdout)
    }
}
