//! Indicator primitives.
//!
//! Every function takes a value slice and returns a series of the same
//! length, NaN-padded over any warm-up prefix. Indicators are always
//! computed over the full aligned history; row retention is a later,
//! separate pass in [`crate::frame`]. Computing over an already-shrunk
//! series would shift the rolling windows and corrupt values silently.

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use ema::ewm_mean;
pub use macd::{crossovers, macd, MacdSeries};
pub use rsi::rsi;
pub use sma::sma;

/// Create synthetic points from close prices for testing.
///
/// Plausible OHLV around each close: open = prev close (or close for the
/// first session), high = max(open, close) + 1, low = min(open, close) - 1.
#[cfg(test)]
pub fn make_points(closes: &[f64]) -> Vec<crate::domain::PricePoint> {
    use crate::domain::PricePoint;
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            PricePoint {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: 1000.0,
            }
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
