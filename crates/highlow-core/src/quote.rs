// File: crates/highlow-core/src/quote.rs
// Summary: Raw feed model (date buckets of spot quotes) and the parsed quote/series types.
// Notes:
// - Raw entries keep the upstream field names; only the four fields the chart needs are read.
// - A `FilteredSeries` keeps feed traversal order. It is not sorted by time.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

use crate::error::{ChartError, Result};

/// Timestamp layout used by `UPDATETIME`, read as a 24-hour clock.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One upstream quote entry as it arrives in the feed.
#[derive(Clone, Debug, Deserialize)]
pub struct RawQuote {
    #[serde(rename = "CCY")]
    pub ccy: String,
    #[serde(rename = "UPDATETIME")]
    pub update_time: String,
    #[serde(rename = "ASKLISTRATE", deserialize_with = "number_or_string")]
    pub ask_rate: f64,
    #[serde(rename = "BIDLISTRATE", deserialize_with = "number_or_string")]
    pub bid_rate: f64,
}

/// All quotes published for one calendar date.
#[derive(Clone, Debug, Deserialize)]
pub struct DateBucket {
    #[serde(default, rename = "Date", alias = "date", alias = "DATE")]
    pub date: Option<String>,
    #[serde(rename = "SpotListRate", default)]
    pub spot_list_rate: Vec<RawQuote>,
}

/// The whole inbound payload: an ordered list of date buckets. Never mutated.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct Feed {
    pub buckets: Vec<DateBucket>,
}

impl Feed {
    pub fn new(buckets: Vec<DateBucket>) -> Self {
        Self { buckets }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Every raw quote in traversal order (bucket by bucket).
    pub fn raw_quotes(&self) -> impl Iterator<Item = &RawQuote> {
        self.buckets.iter().flat_map(|b| b.spot_list_rate.iter())
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.spot_list_rate.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A parsed bid/ask pair for one currency at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteRecord {
    pub currency_code: String,
    pub timestamp: NaiveDateTime,
    pub ask_rate: f64,
    pub bid_rate: f64,
}

impl QuoteRecord {
    /// Parse a raw entry; the currency code is only used to label a failure.
    /// Rates must be finite: `"NaN"` and `"inf"` parse as floats but have no position.
    pub fn parse(raw: &RawQuote) -> Result<Self> {
        let timestamp = parse_timestamp(&raw.ccy, &raw.update_time)?;
        if !raw.ask_rate.is_finite() || !raw.bid_rate.is_finite() {
            return Err(ChartError::InvalidRate {
                code: raw.ccy.clone(),
                timestamp: raw.update_time.clone(),
                ask: raw.ask_rate,
                bid: raw.bid_rate,
            });
        }
        Ok(Self {
            currency_code: raw.ccy.clone(),
            timestamp,
            ask_rate: raw.ask_rate,
            bid_rate: raw.bid_rate,
        })
    }

    /// Milliseconds since the Unix epoch, treating the naive timestamp as UTC.
    pub fn epoch_millis(&self) -> i64 {
        self.timestamp.and_utc().timestamp_millis()
    }
}

pub fn parse_timestamp(code: &str, raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).map_err(|source| ChartError::Parse {
        code: code.to_string(),
        raw: raw.to_string(),
        source,
    })
}

/// Quotes of a single currency, in feed order.
#[derive(Clone, Debug, PartialEq)]
pub struct FilteredSeries {
    pub code: String,
    pub quotes: Vec<QuoteRecord>,
}

impl FilteredSeries {
    pub fn new(code: impl Into<String>, quotes: Vec<QuoteRecord>) -> Self {
        Self { code: code.into(), quotes }
    }

    pub fn len(&self) -> usize { self.quotes.len() }
    pub fn is_empty(&self) -> bool { self.quotes.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, QuoteRecord> { self.quotes.iter() }

    /// `(min, max)` of the quote timestamps as epoch milliseconds.
    pub fn time_extent(&self) -> Option<(i64, i64)> {
        let mut it = self.quotes.iter().map(QuoteRecord::epoch_millis);
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
    }

    /// `(min bid, max ask)` over the series.
    pub fn price_extent(&self) -> Option<(f64, f64)> {
        if self.quotes.is_empty() {
            return None;
        }
        let min_bid = self.quotes.iter().map(|q| q.bid_rate).fold(f64::INFINITY, f64::min);
        let max_ask = self.quotes.iter().map(|q| q.ask_rate).fold(f64::NEG_INFINITY, f64::max);
        Some((min_bid, max_ask))
    }
}

/// Upstream rates are usually JSON numbers but some feeds quote them as strings.
fn number_or_string<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Rate {
        Number(f64),
        Text(String),
    }

    match Rate::deserialize(deserializer)? {
        Rate::Number(v) => Ok(v),
        Rate::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}
