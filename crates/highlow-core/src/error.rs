// File: crates/highlow-core/src/error.rs
// Summary: Errors raised by the pure chart pipeline (parsing, empty data, degenerate ranges).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A quote's `UPDATETIME` did not match `YYYY-MM-DD hh:mm:ss`.
    #[error("{code}: cannot parse timestamp '{raw}': {source}")]
    Parse {
        code: String,
        raw: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A bid or ask rate was NaN or infinite.
    #[error("{code}: non-finite rate at {timestamp} (ask {ask}, bid {bid})")]
    InvalidRate {
        code: String,
        timestamp: String,
        ask: f64,
        bid: f64,
    },

    #[error("{code}: no quotes left after filtering")]
    EmptyDataset { code: String },

    /// Price extent has no height and the caller asked not to widen it.
    #[error("degenerate price range: min bid {min_bid} vs max ask {max_ask}")]
    DegenerateRange { min_bid: f64, max_ask: f64 },

    #[error("malformed feed: {0}")]
    Feed(#[from] serde_json::Error),
}

impl ChartError {
    /// Short machine-readable tag for reports.
    pub fn kind(&self) -> &'static str {
        match self {
            ChartError::Parse { .. } => "parse",
            ChartError::InvalidRate { .. } => "invalid_rate",
            ChartError::EmptyDataset { .. } => "empty_dataset",
            ChartError::DegenerateRange { .. } => "degenerate_range",
            ChartError::Feed(_) => "feed",
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
