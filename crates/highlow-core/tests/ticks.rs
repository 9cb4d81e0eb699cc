// File: crates/highlow-core/tests/ticks.rs
// Purpose: Tick counts, ordering and the exact positions for a known session.

mod common;

use chrono::NaiveDateTime;
use common::{assert_close, feed, quote, usd_session};
use highlow_core::grid::{linspace, time_ticks};
use highlow_core::{compute_scales, filter_rates, generate_ticks, ChartConfig, DegeneratePolicy};

fn ms(s: &str) -> i64 {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("time").and_utc().timestamp_millis()
}

#[test]
fn session_ticks() {
    let series = filter_rates(&usd_session(), "USD").expect("filter");
    let scales = compute_scales(&series, &ChartConfig::default(), DegeneratePolicy::Floor).expect("scales");
    let ticks = generate_ticks(&scales.extent);

    let want_y = [29.8, 29.94, 30.08, 30.22, 30.36, 30.5];
    assert_eq!(ticks.y.len(), want_y.len());
    for (got, want) in ticks.y.iter().zip(want_y) {
        assert_close(*got, want);
    }

    let want_x: Vec<i64> = ["09:20:00", "10:40:00", "12:00:00", "13:20:00", "14:40:00"]
        .iter()
        .map(|t| ms(&format!("2020-01-02 {t}")))
        .collect();
    assert_eq!(ticks.x, want_x);
}

#[test]
fn interior_ticks_exclude_extremes() {
    let x = time_ticks(0, 600);
    assert_eq!(x, vec![100, 200, 300, 400, 500]);
}

#[test]
fn time_ticks_truncate_toward_start() {
    let x = time_ticks(1_000, 1_000 + 60_001);
    assert_eq!(x[0], 1_000 + 10_000);
    assert_eq!(x[4], 1_000 + 50_000);
}

#[test]
fn counts_and_strict_order_hold_for_odd_inputs() {
    let feeds = vec![
        feed(vec![vec![quote("USD", "2020-01-02 09:00:00", 30.0, 29.5)]]),
        feed(vec![vec![
            quote("USD", "2020-01-02 09:00:00", 30.0, 30.0),
            quote("USD", "2020-01-02 09:00:10", 30.0, 30.0),
        ]]),
        usd_session(),
    ];
    for f in feeds {
        let series = filter_rates(&f, "USD").expect("filter");
        let scales = compute_scales(&series, &ChartConfig::default(), DegeneratePolicy::Floor).expect("scales");
        let ticks = generate_ticks(&scales.extent);
        assert_eq!(ticks.x.len(), 5);
        assert_eq!(ticks.y.len(), 6);
        assert!(ticks.x.windows(2).all(|w| w[0] < w[1]), "x ticks {:?}", ticks.x);
        assert!(ticks.y.windows(2).all(|w| w[0] < w[1]), "y ticks {:?}", ticks.y);
    }
}

#[test]
fn linspace_includes_both_ends() {
    let v = linspace(1.0, 2.0, 3);
    assert_eq!(v, vec![1.0, 1.5, 2.0]);
}
