// File: crates/highlow-core/src/text.rs
// Summary: Axis label formatting for time ticks (month/day) and price ticks.

use chrono::DateTime;

/// Abbreviated month followed by zero-padded day, e.g. `Jan02`.
pub fn format_time_label(epoch_ms: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(t) => t.format("%b%d").to_string(),
        None => String::new(),
    }
}

/// Decimals needed to tell neighbouring price ticks apart: one more than the
/// magnitude of the step, clamped to 0..=6.
pub fn price_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 2;
    }
    let digits = (-step.log10()).ceil() + 1.0;
    digits.clamp(0.0, 6.0) as usize
}

pub fn format_price(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}
