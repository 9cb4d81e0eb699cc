// File: crates/highlow-core/src/scale.rs
// Summary: Time (X) and price (Y) linear scales, series extents and their degenerate-range floors.

use chrono::NaiveDateTime;

use crate::error::{ChartError, Result};
use crate::quote::FilteredSeries;
use crate::types::ChartConfig;

/// Fraction of the bid/ask spread added above and below the price domain.
pub const PRICE_PADDING_RATIO: f64 = 0.14;
/// Price spans at or below this are treated as zero height.
pub const MIN_PRICE_SPAN: f64 = 1e-9;
/// Time spans shorter than this cannot hold five distinct interior ticks
/// (`min + i * span / 6` only strictly increases once `span >= 6`).
pub const MIN_TIME_SPAN_MS: i64 = 6;
/// Width given to a time extent that is too short, centred on its midpoint.
pub const FLOOR_TIME_SPAN_MS: i64 = 3_600_000;

/// Mapping between a data domain and a pixel range.
pub trait ScaleTransform {
    type Input;
    fn to_px(&self, v: Self::Input) -> f64;
    fn from_px(&self, px: f64) -> Self::Input;
    fn domain(&self) -> (Self::Input, Self::Input);
    fn range(&self) -> (f64, f64);
}

/// Straight-line interpolation from `domain` onto `range`; either may be inverted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) * 0.5;
        }
        r0 + (v - d0) / span * (r1 - r0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return (d0 + d1) * 0.5;
        }
        d0 + (px - r0) / span * (d1 - d0)
    }
}

impl ScaleTransform for LinearScale {
    type Input = f64;
    fn to_px(&self, v: f64) -> f64 { self.map(v) }
    fn from_px(&self, px: f64) -> f64 { self.invert(px) }
    fn domain(&self) -> (f64, f64) { self.domain }
    fn range(&self) -> (f64, f64) { self.range }
}

/// Horizontal scale over epoch milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub start_ms: i64,
    pub end_ms: i64,
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(start_ms: i64, end_ms: i64, width_px: f64) -> Self {
        Self {
            start_ms,
            end_ms,
            linear: LinearScale::new((start_ms as f64, end_ms as f64), (0.0, width_px)),
        }
    }

    #[inline]
    pub fn to_px_time(&self, t: NaiveDateTime) -> f64 {
        self.to_px(t.and_utc().timestamp_millis())
    }
}

impl ScaleTransform for TimeScale {
    type Input = i64;
    fn to_px(&self, ms: i64) -> f64 { self.linear.map(ms as f64) }
    fn from_px(&self, px: f64) -> i64 { self.linear.invert(px).round() as i64 }
    fn domain(&self) -> (i64, i64) { (self.start_ms, self.end_ms) }
    fn range(&self) -> (f64, f64) { self.linear.range }
}

/// Vertical price scale; larger prices map to smaller y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    linear: LinearScale,
}

impl ValueScale {
    /// `vmin` lands on `bottom_px`, `vmax` on `top_px`.
    pub fn new_linear(top_px: f64, bottom_px: f64, vmin: f64, vmax: f64) -> Self {
        Self { linear: LinearScale::new((vmin, vmax), (bottom_px, top_px)) }
    }
}

impl ScaleTransform for ValueScale {
    type Input = f64;
    fn to_px(&self, y: f64) -> f64 { self.linear.map(y) }
    fn from_px(&self, py: f64) -> f64 { self.linear.invert(py) }
    fn domain(&self) -> (f64, f64) { self.linear.domain }
    fn range(&self) -> (f64, f64) { self.linear.range }
}

/// What to do when every quote sits at one price.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Widen the price extent around its midpoint.
    #[default]
    Floor,
    /// Fail with [`ChartError::DegenerateRange`].
    Reject,
}

/// Unpadded data bounds of a series, after any degenerate-range floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesExtent {
    pub min_ms: i64,
    pub max_ms: i64,
    pub min_bid: f64,
    pub max_ask: f64,
}

impl SeriesExtent {
    pub fn from_series(series: &FilteredSeries, policy: DegeneratePolicy) -> Result<Self> {
        let empty = || ChartError::EmptyDataset { code: series.code.clone() };
        let (min_ms, max_ms) = series.time_extent().ok_or_else(empty)?;
        let (min_bid, max_ask) = series.price_extent().ok_or_else(empty)?;
        if !min_bid.is_finite() || !max_ask.is_finite() {
            return Err(ChartError::DegenerateRange { min_bid, max_ask });
        }

        let (min_ms, max_ms) = floor_time_span(min_ms, max_ms);
        let (min_bid, max_ask) = if max_ask - min_bid > MIN_PRICE_SPAN {
            (min_bid, max_ask)
        } else {
            match policy {
                DegeneratePolicy::Reject => return Err(ChartError::DegenerateRange { min_bid, max_ask }),
                DegeneratePolicy::Floor => floor_price_span(min_bid, max_ask),
            }
        };
        Ok(Self { min_ms, max_ms, min_bid, max_ask })
    }

    pub fn price_span(&self) -> f64 { self.max_ask - self.min_bid }
    pub fn time_span_ms(&self) -> i64 { self.max_ms - self.min_ms }

    /// Padding added on both sides of the price domain.
    pub fn price_padding(&self) -> f64 { self.price_span() * PRICE_PADDING_RATIO }
}

fn floor_time_span(min_ms: i64, max_ms: i64) -> (i64, i64) {
    if max_ms - min_ms >= MIN_TIME_SPAN_MS {
        return (min_ms, max_ms);
    }
    let mid = min_ms + (max_ms - min_ms) / 2;
    (mid - FLOOR_TIME_SPAN_MS / 2, mid + FLOOR_TIME_SPAN_MS / 2)
}

fn floor_price_span(min_bid: f64, max_ask: f64) -> (f64, f64) {
    let mid = (min_bid + max_ask) * 0.5;
    let half = (mid.abs() * 0.001).max(1e-4).max((max_ask - min_bid).abs() * 0.5);
    (mid - half, mid + half)
}

/// The two scales of one chart plus the extent they were derived from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleSet {
    pub time: TimeScale,
    pub price: ValueScale,
    pub extent: SeriesExtent,
}

impl ScaleSet {
    pub fn max_ask(&self) -> f64 { self.extent.max_ask }
    pub fn min_bid(&self) -> f64 { self.extent.min_bid }
}

/// Build the time and padded price scales for `series` inside `config`'s draw area.
pub fn compute_scales(
    series: &FilteredSeries,
    config: &ChartConfig,
    policy: DegeneratePolicy,
) -> Result<ScaleSet> {
    let extent = SeriesExtent::from_series(series, policy)?;
    let pad = extent.price_padding();
    let time = TimeScale::new(extent.min_ms, extent.max_ms, config.draw_width());
    let price = ValueScale::new_linear(0.0, config.draw_height(), extent.min_bid - pad, extent.max_ask + pad);
    Ok(ScaleSet { time, price, extent })
}
