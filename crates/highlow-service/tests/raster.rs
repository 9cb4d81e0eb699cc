// File: crates/highlow-service/tests/raster.rs
// Purpose: Rasterizer adapters behind the async port.

mod common;

use highlow_core::{build_scene, EncodeParams, RenderOptions};
use highlow_service::raster::{convert_args, ConvertRasterizer, SkiaBackend};
use highlow_service::{RasterizeError, Rasterizer};

#[test]
fn convert_command_line() {
    let args = convert_args(&EncodeParams::default());
    let expected = [
        "-density", "72",
        "-quality", "40",
        "-define", "png:compression-level=9",
        "-define", "png:compression-filter=6",
        "-define", "png:compression-strategy=0",
        "-depth", "8",
        "svg:", "png:-",
    ];
    assert_eq!(args, expected);
}

#[tokio::test]
async fn missing_convert_binary_is_a_spawn_error() {
    let scene = build_scene(&common::mixed_feed(), "USD", &RenderOptions::default()).unwrap();
    let rasterizer = ConvertRasterizer::new("/nonexistent/highlow-convert");
    let err = rasterizer.rasterize(&scene.to_markup(), &EncodeParams::default()).await.unwrap_err();
    assert!(matches!(err, RasterizeError::Spawn { .. }), "{err:?}");
}

#[tokio::test]
async fn skia_backend_emits_png() {
    let scene = build_scene(&common::mixed_feed(), "EUR", &RenderOptions::default()).unwrap();
    let png = SkiaBackend::default()
        .rasterize(&scene.to_markup(), &EncodeParams::default())
        .await
        .unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}
