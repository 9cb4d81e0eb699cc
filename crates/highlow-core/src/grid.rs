// File: crates/highlow-core/src/grid.rs
// Summary: Tick layout helpers: interior time ticks and evenly spaced price ticks.

use crate::scale::SeriesExtent;

/// Number of interior ticks on the time axis.
pub const X_TICK_COUNT: usize = 5;
/// Number of ticks on the price axis, both extremes included.
pub const Y_TICK_COUNT: usize = 6;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Axis label positions in data space; rendering decides how they look.
#[derive(Clone, Debug, PartialEq)]
pub struct TickSet {
    /// Interior timestamps, epoch milliseconds.
    pub x: Vec<i64>,
    /// Prices from min bid to max ask.
    pub y: Vec<f64>,
}

impl TickSet {
    /// Distance between neighbouring price ticks.
    pub fn y_step(&self) -> f64 {
        match self.y.as_slice() {
            [a, b, ..] => b - a,
            _ => 0.0,
        }
    }
}

/// Split the time span into six equal periods and keep the five inner boundaries.
/// Integer arithmetic truncates toward the start of the span.
pub fn time_ticks(min_ms: i64, max_ms: i64) -> Vec<i64> {
    let span = max_ms - min_ms;
    let parts = (X_TICK_COUNT + 1) as i64;
    (1..=X_TICK_COUNT as i64).map(|i| min_ms + i * span / parts).collect()
}

/// Six values from `min_bid` to `max_ask` inclusive, one fifth of the spread apart.
pub fn price_ticks(min_bid: f64, max_ask: f64) -> Vec<f64> {
    linspace(min_bid, max_ask, Y_TICK_COUNT)
}

/// Ticks come from the unpadded series extent, not from the padded scale domain.
pub fn generate_ticks(extent: &SeriesExtent) -> TickSet {
    TickSet {
        x: time_ticks(extent.min_ms, extent.max_ms),
        y: price_ticks(extent.min_bid, extent.max_ask),
    }
}
