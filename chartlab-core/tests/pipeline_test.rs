//! End-to-end pipeline scenarios: align → indicators → geometry.
//!
//! Exercises the public API only, the way the CLI drives it.

use chartlab_core::data::{RawRow, TradingCalendar};
use chartlab_core::frame::WARMUP;
use chartlab_core::geometry::{build_geometry, BreakoutSide};
use chartlab_core::{align_sessions, compute_frame, ChartError};
use chrono::NaiveDate;

/// Raw rows on consecutive calendar days, one per close, with a calendar
/// that accepts all of them.
fn rows_from_closes(closes: &[f64]) -> (Vec<RawRow>, TradingCalendar) {
    let base = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let rows: Vec<RawRow> = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            RawRow {
                date: base + chrono::Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: 1000.0,
            }
        })
        .collect();
    let calendar = TradingCalendar::from_dates(rows.iter().map(|r| r.date));
    (rows, calendar)
}

#[test]
fn flat_month_stays_inside_the_envelope() {
    // 30 flat sessions: the mean is the price itself, so the close can
    // never clear a ±5% band around it.
    let closes = vec![100.0; 30];
    let (rows, calendar) = rows_from_closes(&closes);

    let series = align_sessions(&rows, &calendar, "FLAT").unwrap();
    let (series, frame) = compute_frame(&series).unwrap();

    assert_eq!(frame.len(), 30 - WARMUP);
    for i in 0..frame.len() {
        assert!((frame.ma[i] - 100.0).abs() < 1e-10);
        assert!((frame.rsi[i] - 50.0).abs() < 1e-10);
    }

    let geometry = build_geometry(&series, &frame);
    assert!(geometry.breakouts.is_empty());
    assert!(geometry.crossovers.is_empty());
}

#[test]
fn single_spike_emits_one_breakout_above() {
    // Flat history with one +20% close: only the spike session clears the
    // upper band, because the 10-session mean barely moves.
    let mut closes = vec![100.0; 40];
    closes[30] = 120.0;
    let (rows, calendar) = rows_from_closes(&closes);

    let series = align_sessions(&rows, &calendar, "SPIKE").unwrap();
    let (series, frame) = compute_frame(&series).unwrap();
    let geometry = build_geometry(&series, &frame);

    assert_eq!(geometry.breakouts.len(), 1);
    let marker = &geometry.breakouts[0];
    assert_eq!(marker.side, BreakoutSide::Above);
    assert_eq!(marker.position, 30 - WARMUP);
    assert_eq!(marker.price, 120.0);
}

#[test]
fn empty_table_is_no_data() {
    let calendar = TradingCalendar::from_dates([]);
    let err = align_sessions(&[], &calendar, "EMPTY").unwrap_err();
    assert!(matches!(err, ChartError::NoData { .. }));
}

#[test]
fn twenty_sessions_is_insufficient_history() {
    let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
    let (rows, calendar) = rows_from_closes(&closes);

    let series = align_sessions(&rows, &calendar, "SHORT").unwrap();
    assert_eq!(series.len(), 20);

    let err = compute_frame(&series).unwrap_err();
    assert!(matches!(err, ChartError::InsufficientHistory { .. }));
}

#[test]
fn frame_never_outgrows_its_series() {
    let closes: Vec<f64> = (0..90).map(|i| 100.0 + (i as f64 * 0.5).sin() * 6.0).collect();
    let (rows, calendar) = rows_from_closes(&closes);

    let series = align_sessions(&rows, &calendar, "WAVE").unwrap();
    let aligned_len = series.len();
    let (trimmed, frame) = compute_frame(&series).unwrap();

    assert!(frame.len() <= aligned_len);
    assert_eq!(aligned_len - frame.len(), WARMUP);
    assert_eq!(trimmed.len(), frame.len());
}

#[test]
fn moving_average_matches_trailing_mean() {
    let closes: Vec<f64> = (0..70).map(|i| 100.0 + (i as f64 * 0.9).cos() * 9.0).collect();
    let (rows, calendar) = rows_from_closes(&closes);

    let series = align_sessions(&rows, &calendar, "MA").unwrap();
    let (_, frame) = compute_frame(&series).unwrap();

    // Frame position j corresponds to original position j + WARMUP.
    for j in 0..frame.len() {
        let i = j + WARMUP;
        let mean: f64 = closes[(i - 9)..=i].iter().sum::<f64>() / 10.0;
        assert!(
            (frame.ma[j] - mean).abs() < 1e-9,
            "ma mismatch at frame position {j}"
        );
    }
}

#[test]
fn vendor_artifacts_are_dropped_before_computation() {
    // A weekend artifact row sits between two real sessions; the calendar
    // rejects it and the windows are computed over sessions only.
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + i as f64 * 0.3).collect();
    let (mut rows, _) = rows_from_closes(&closes);
    let weekend = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
    rows.insert(
        0,
        RawRow {
            date: weekend,
            open: 500.0,
            high: 501.0,
            low: 499.0,
            close: 500.0,
            volume: 1.0,
        },
    );
    let calendar = TradingCalendar::from_dates(rows[1..].iter().map(|r| r.date));

    let series = align_sessions(&rows, &calendar, "ARTIFACT").unwrap();
    assert_eq!(series.len(), 40);
    assert!(series.iter().all(|p| p.close < 200.0));

    let (_, frame) = compute_frame(&series).unwrap();
    assert_eq!(frame.len(), 40 - WARMUP);
}
