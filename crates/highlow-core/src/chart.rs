// File: crates/highlow-core/src/chart.rs
// Summary: Chart plan (filter -> scales -> ticks) and the scene builder for bands, axes, curves and legend.

use crate::axis::{Axis, AxisTick, Orientation};
use crate::curve::basis_path;
use crate::error::Result;
use crate::filter::filter_rates;
use crate::geometry::{PathData, Point};
use crate::grid::{generate_ticks, TickSet};
use crate::quote::{Feed, FilteredSeries, QuoteRecord};
use crate::scale::{compute_scales, DegeneratePolicy, ScaleSet, ScaleTransform};
use crate::scene::{Group, PathNode, RectNode, Stroke, TextAnchor, TextNode, TextStyle, VectorScene};
use crate::text::{format_price, format_time_label, price_decimals};
use crate::theme::{Color, Theme};
use crate::types::{ChartConfig, LEGEND_HEIGHT};

/// Height of one background band, in pixels.
pub const BAND_HEIGHT: f64 = 15.0;
/// Stroke width of the two price curves.
pub const CURVE_WIDTH: f64 = 2.0;
/// Total width of the legend (two swatches and their labels).
const LEGEND_WIDTH: f64 = 119.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub config: ChartConfig,
    pub theme: Theme,
    /// Draw the Sell/Buy legend under the x axis.
    pub legend: bool,
    pub degenerate: DegeneratePolicy,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            config: ChartConfig::default(),
            theme: Theme::default(),
            legend: false,
            degenerate: DegeneratePolicy::default(),
        }
    }
}

/// Everything the renderer needs for one currency, computed once and passed along.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPlan {
    pub series: FilteredSeries,
    pub scales: ScaleSet,
    pub ticks: TickSet,
}

impl ChartPlan {
    /// Filter `feed` down to `code` and derive its scales and ticks.
    pub fn build(feed: &Feed, code: &str, opts: &RenderOptions) -> Result<Self> {
        let series = filter_rates(feed, code)?;
        Self::from_series(series, opts)
    }

    pub fn from_series(series: FilteredSeries, opts: &RenderOptions) -> Result<Self> {
        let scales = compute_scales(&series, &opts.config, opts.degenerate)?;
        let ticks = generate_ticks(&scales.extent);
        tracing::debug!(
            code = %series.code,
            quotes = series.len(),
            min_bid = scales.min_bid(),
            max_ask = scales.max_ask(),
            "chart plan ready"
        );
        Ok(Self { series, scales, ticks })
    }

    pub fn render(&self, opts: &RenderOptions) -> VectorScene {
        render_chart(&self.series, &self.scales, &self.ticks, opts)
    }
}

/// Filter, scale, tick and draw `code` in one call.
pub fn build_scene(feed: &Feed, code: &str, opts: &RenderOptions) -> Result<VectorScene> {
    Ok(ChartPlan::build(feed, code, opts)?.render(opts))
}

/// Compose the chart scene. Pure: identical inputs give identical scenes.
pub fn render_chart(
    series: &FilteredSeries,
    scales: &ScaleSet,
    ticks: &TickSet,
    opts: &RenderOptions,
) -> VectorScene {
    let config = &opts.config;
    let theme = &opts.theme;
    let insets = config.insets;

    let mut plot = Group::with_class("plot").translated(insets.left as f64, insets.top as f64);
    plot.push(draw_bands(scales, config.draw_width(), theme));
    plot.push(x_axis(scales, ticks, config).to_group(theme).translated(0.0, config.draw_height()));
    plot.push(y_axis(scales, ticks).to_group(theme));
    plot.push(price_curve(series, scales, |q| q.ask_rate, theme.ask_stroke, "ask"));
    plot.push(price_curve(series, scales, |q| q.bid_rate, theme.bid_stroke, "bid"));

    let mut height = config.height;
    if opts.legend {
        plot.push(draw_legend(config, theme));
        height += LEGEND_HEIGHT;
    }

    let mut root = Group::new();
    root.push(plot);
    VectorScene {
        width: config.width,
        height,
        title: format!("{} Exchange Rate", series.code),
        root,
    }
}

// ---- helpers ----------------------------------------------------------------

/// Alternating accent/clear bands from the max-ask row down to the min-bid row.
fn draw_bands(scales: &ScaleSet, width: f64, theme: &Theme) -> Group {
    let mut group = Group::with_class("bands");
    let top = scales.price.to_px(scales.max_ask());
    let bottom = scales.price.to_px(scales.min_bid());

    let mut y = top;
    let mut accent = true;
    while y < bottom {
        let fill = if accent { theme.band } else { Color::TRANSPARENT };
        // The last band stops at the min-bid row.
        let height = BAND_HEIGHT.min(bottom - y);
        group.push(RectNode { x: 0.0, y, width, height, fill });
        accent = !accent;
        y += BAND_HEIGHT;
    }
    group
}

fn x_axis(scales: &ScaleSet, ticks: &TickSet, config: &ChartConfig) -> Axis {
    let axis_ticks = ticks
        .x
        .iter()
        .map(|&ms| AxisTick { offset: scales.time.to_px(ms), label: format_time_label(ms) })
        .collect();
    Axis::new(Orientation::Bottom, axis_ticks)
        .with_tick_size(-config.draw_height())
        .with_domain(config.draw_width())
}

fn y_axis(scales: &ScaleSet, ticks: &TickSet) -> Axis {
    let decimals = price_decimals(ticks.y_step());
    let axis_ticks = ticks
        .y
        .iter()
        .map(|&v| AxisTick { offset: scales.price.to_px(v), label: format_price(v, decimals) })
        .collect();
    Axis::new(Orientation::Left, axis_ticks).with_tick_size(0.0)
}

fn price_curve(
    series: &FilteredSeries,
    scales: &ScaleSet,
    rate: impl Fn(&QuoteRecord) -> f64,
    color: Color,
    class: &str,
) -> Group {
    let points: Vec<Point> = series
        .iter()
        .map(|q| Point::new(scales.time.to_px_time(q.timestamp), scales.price.to_px(rate(q))))
        .collect();
    let mut group = Group::with_class(class);
    group.push(PathNode {
        data: basis_path(&points),
        fill: None,
        stroke: Some(Stroke::new(color, CURVE_WIDTH)),
    });
    group
}

fn draw_legend(config: &ChartConfig, theme: &Theme) -> Group {
    let x = (config.draw_width() - LEGEND_WIDTH) / 2.0;
    let mut group = Group::with_class("legend").translated(x, config.draw_height() + 13.0);
    let style = TextStyle { size: 13.0, fill: theme.legend_label, bold: true, uppercase: false };

    let entries = [(0.0, theme.ask_stroke, "Sell"), (70.0, theme.bid_stroke, "Buy")];
    for (offset, color, label) in entries {
        group.push(PathNode {
            data: PathData::new().move_to(offset, 12.0).line_to(offset + 16.0, 12.0),
            fill: None,
            stroke: Some(Stroke::new(color, CURVE_WIDTH)),
        });
        group.push(TextNode {
            x: offset + 21.0,
            y: 16.0,
            dy: None,
            anchor: TextAnchor::Start,
            style,
            content: label.to_string(),
        });
    }
    group
}
