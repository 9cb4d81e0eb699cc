// File: crates/highlow-core/src/filter.rs
// Summary: Select one currency's quotes inside the trading-hour window from a feed.

use chrono::Timelike;

use crate::error::Result;
use crate::quote::{Feed, FilteredSeries, QuoteRecord};

/// Quotes stamped at or after this hour are stale or holiday entries and are dropped.
pub const TRADING_CUTOFF_HOUR: u32 = 17;

/// Keep the quotes of `code` whose hour-of-day is before the cutoff, in feed order.
///
/// Only entries of the requested currency are parsed; a malformed timestamp on one of
/// them fails the whole selection with [`ChartError::Parse`](crate::ChartError::Parse).
pub fn filter_rates(feed: &Feed, code: &str) -> Result<FilteredSeries> {
    let mut quotes = Vec::new();
    for raw in feed.raw_quotes().filter(|raw| raw.ccy == code) {
        let quote = QuoteRecord::parse(raw)?;
        if quote.timestamp.hour() < TRADING_CUTOFF_HOUR {
            quotes.push(quote);
        }
    }
    Ok(FilteredSeries::new(code, quotes))
}
