// File: crates/highlow-core/src/lib.rs
// Summary: Core library entry point; exports the quote filter, scales, ticks and chart scene builder.

pub mod axis;
pub mod chart;
pub mod curve;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod grid;
pub mod quote;
pub mod scale;
pub mod scene;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{build_scene, render_chart, ChartPlan, RenderOptions};
pub use error::ChartError;
pub use filter::filter_rates;
pub use grid::{generate_ticks, TickSet};
pub use quote::{DateBucket, Feed, FilteredSeries, QuoteRecord, RawQuote};
pub use scale::{compute_scales, DegeneratePolicy, ScaleSet, ScaleTransform, SeriesExtent};
pub use scene::{SceneMarkup, VectorScene};
pub use theme::Theme;
pub use types::{ChartConfig, EncodeParams, Insets};
