// File: crates/highlow-core/src/theme.rs
// Summary: Chart palette and the RGBA color type used by the scene.

use std::fmt;

/// 8-bit RGB with a fractional alpha, written out as CSS.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_rgba(0, 0, 0, 0.0);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub ask_stroke: Color,
    pub bid_stroke: Color,
    pub band: Color,
    pub grid: Color,
    pub axis_label: Color,
    pub legend_label: Color,
}

impl Theme {
    /// The stock HighLow look: blue ask curve, orange bid curve, faint blue bands.
    pub fn highlow() -> Self {
        Self {
            name: "highlow",
            ask_stroke: Color::from_rgb(0x7c, 0xb5, 0xec),
            bid_stroke: Color::from_rgb(0xf7, 0xa3, 0x5c),
            band: Color::from_rgba(68, 170, 213, 0.1),
            grid: Color::from_rgb(0xd8, 0xd8, 0xd8),
            axis_label: Color::from_rgb(0x70, 0x70, 0x70),
            legend_label: Color::from_rgb(0x33, 0x33, 0x33),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::highlow()
    }
}
