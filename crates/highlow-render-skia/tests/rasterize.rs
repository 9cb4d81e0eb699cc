// File: crates/highlow-render-skia/tests/rasterize.rs
// Purpose: Rasterize a real chart scene and check the PNG that comes back.

use highlow_core::{build_scene, EncodeParams, Feed, RenderOptions};
use highlow_render_skia::{RasterError, SkiaRasterizer};

fn usd_feed() -> Feed {
    let body = r#"[{"SpotListRate":[
        {"CCY":"USD","UPDATETIME":"2020-01-02 08:00:00","ASKLISTRATE":30.0,"BIDLISTRATE":29.8},
        {"CCY":"USD","UPDATETIME":"2020-01-02 12:00:00","ASKLISTRATE":30.5,"BIDLISTRATE":30.2},
        {"CCY":"USD","UPDATETIME":"2020-01-02 16:00:00","ASKLISTRATE":30.1,"BIDLISTRATE":29.85}
    ]}]"#;
    Feed::from_json(body).expect("feed")
}

#[test]
fn renders_png_at_scene_size() {
    let scene = build_scene(&usd_feed(), "USD", &RenderOptions::default()).expect("scene");
    let bytes = SkiaRasterizer::new()
        .rasterize(&scene.to_markup(), &EncodeParams::default())
        .expect("rasterize");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (425, 200));
    // Top-left corner lies in the margin: plain background.
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn density_scales_output() {
    let scene = build_scene(&usd_feed(), "USD", &RenderOptions::default()).expect("scene");
    let params = EncodeParams { density: 144, ..EncodeParams::default() };
    let bytes = SkiaRasterizer::new().rasterize(&scene.to_markup(), &params).expect("rasterize");
    let img = image::load_from_memory(&bytes).expect("decode");
    assert_eq!((img.width(), img.height()), (850, 400));
}

#[test]
fn sixteen_bit_depth_is_refused() {
    let scene = build_scene(&usd_feed(), "USD", &RenderOptions::default()).expect("scene");
    let params = EncodeParams { depth: 16, ..EncodeParams::default() };
    let err = SkiaRasterizer::new().rasterize(&scene.to_markup(), &params).expect_err("depth 16");
    assert!(matches!(err, RasterError::Unsupported(_)));
}
