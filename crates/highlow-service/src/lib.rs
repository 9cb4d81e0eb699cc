// File: crates/highlow-service/src/lib.rs
// Summary: Batch service library: config, logging, rasterizer and publisher ports, orchestration, CLI.

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod publish;
pub mod raster;

pub use batch::{BatchReport, Pipeline};
pub use config::Config;
pub use error::{ChartFailure, PublishError, RasterizeError};
pub use publish::{ExpiryPolicy, ObjectKey, PublishedChart, Publisher, UrlPolicy, UrlSigner};
pub use raster::Rasterizer;
