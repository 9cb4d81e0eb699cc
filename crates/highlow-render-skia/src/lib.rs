// File: crates/highlow-render-skia/src/lib.rs
// Summary: Skia CPU rasterizer: loads scene SVG markup, paints it on a raster surface, encodes PNG.

use highlow_core::{EncodeParams, SceneMarkup};
use skia_safe as skia;
use skia::png_encoder::{self, FilterFlag};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("unsupported encode parameters: {0}")]
    Unsupported(String),
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("scene markup rejected by svg loader: {0}")]
    Load(String),
    #[error("raster surface pixels are not addressable")]
    Pixels,
    #[error("encode PNG failed")]
    Encode,
}

pub struct SkiaRasterizer {
    background: skia::Color,
}

impl Default for SkiaRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaRasterizer {
    pub fn new() -> Self {
        Self { background: skia::Color::WHITE }
    }

    pub fn with_background(background: skia::Color) -> Self {
        Self { background }
    }

    /// Paint `markup` at `params.density` (72 dpi is 1:1 with scene units) and encode it as PNG.
    pub fn rasterize(&self, markup: &SceneMarkup, params: &EncodeParams) -> Result<Vec<u8>, RasterError> {
        if params.depth != 8 {
            return Err(RasterError::Unsupported(format!("bit depth {}", params.depth)));
        }
        if params.density == 0 {
            return Err(RasterError::Unsupported("zero density".to_string()));
        }
        let scale = params.density as f32 / 72.0;
        let width = (markup.width as f32 * scale).round() as i32;
        let height = (markup.height as f32 * scale).round() as i32;

        let mut dom = skia::svg::Dom::from_bytes(markup.svg.as_bytes(), skia::FontMgr::default())
            .map_err(|e| RasterError::Load(e.to_string()))?;
        dom.set_container_size((markup.width as f32, markup.height as f32));

        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(RasterError::Surface { width, height })?;
        {
            let canvas = surface.canvas();
            canvas.clear(self.background);
            canvas.scale((scale, scale));
            dom.render(canvas);
        }

        let pixmap = surface.peek_pixels().ok_or(RasterError::Pixels)?;
        let options = png_encoder::Options {
            filter_flags: filter_flags(params.compression_filter),
            z_lib_level: params.compression_level.min(9) as i32,
            ..Default::default()
        };
        let mut out = Vec::new();
        if !png_encoder::encode(&pixmap, &mut out, &options) {
            return Err(RasterError::Encode);
        }
        Ok(out)
    }
}

/// ImageMagick's filter selector: 0..=4 pick one row filter, anything higher is adaptive.
fn filter_flags(selector: u32) -> FilterFlag {
    match selector {
        0 => FilterFlag::NONE,
        1 => FilterFlag::SUB,
        2 => FilterFlag::UP,
        3 => FilterFlag::AVG,
        4 => FilterFlag::PAETH,
        _ => FilterFlag::ALL,
    }
}
