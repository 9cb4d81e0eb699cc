// File: crates/highlow-core/src/types.rs
// Summary: Shared layout types and constants (canvas size, margins, encode parameters).

/// Default canvas width in pixels, margins included.
pub const WIDTH: u32 = 425;
/// Default canvas height in pixels, margins included.
pub const HEIGHT: u32 = 200;
/// Extra canvas height reserved below the x axis when the legend is drawn.
pub const LEGEND_HEIGHT: u32 = 16;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(30, 12, 10, 15)
    }
}

/// Fixed layout of one chart: outer canvas size and the margins around the draw area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
}

impl ChartConfig {
    pub const fn new(width: u32, height: u32, insets: Insets) -> Self {
        Self { width, height, insets }
    }

    /// Width of the plotting area (canvas minus horizontal margins).
    pub fn draw_width(&self) -> f64 {
        self.width.saturating_sub(self.insets.hsum()) as f64
    }

    /// Height of the plotting area (canvas minus vertical margins).
    pub fn draw_height(&self) -> f64 {
        self.height.saturating_sub(self.insets.vsum()) as f64
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }
}

/// Bitmap encoding parameters handed to a rasterizer along with the scene markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodeParams {
    /// Output density in dots per inch.
    pub density: u32,
    pub quality: u32,
    /// zlib compression level, 0..=9.
    pub compression_level: u32,
    /// PNG row filter selector; 0..=4 pick a single filter, 5 and up mean adaptive.
    pub compression_filter: u32,
    pub compression_strategy: u32,
    /// Bits per channel.
    pub depth: u32,
}

impl Default for EncodeParams {
    fn default() -> Self {
        Self {
            density: 72,
            quality: 40,
            compression_level: 9,
            compression_filter: 6,
            compression_strategy: 0,
            depth: 8,
        }
    }
}
