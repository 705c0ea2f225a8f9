//! Indicator engine — aligned sessions in, fully-defined indicator frame out.
//!
//! Every series is computed over the full aligned history first; only then
//! is the warm-up prefix (plus any stray non-finite position) dropped, in a
//! single atomic pass, and the survivors re-densified from position 0. The
//! ordering is load-bearing: computing over an already-shrunk series would
//! shift the 14/26 windows.

use crate::domain::AlignedSeries;
use crate::error::ChartError;
use crate::indicators::macd::SLOW_SPAN;
use crate::indicators::{crossovers, macd, rsi, sma};
use serde::{Deserialize, Serialize};

/// Moving-average window over close prices.
pub const MA_PERIOD: usize = 10;
/// Envelope half-width as a fraction of the moving average.
pub const ENVELOPE_WIDTH: f64 = 0.05;
/// RSI window over one-session changes.
pub const RSI_PERIOD: usize = 14;

/// Leading positions without a full seed for the slowest EMA span. The
/// 10-session MA and 14-session RSI are already defined well before this,
/// so the 26-span EMA is the warm-up bottleneck.
pub const WARMUP: usize = SLOW_SPAN - 1;

/// Per-position indicator values, parallel to the re-densified series.
///
/// Every field is finite at every position; rows that would have had any
/// undefined field were dropped whole by [`compute_frame`]. Read-only after
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorFrame {
    pub ma: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
    pub rsi: Vec<f64>,
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
    pub cross_up: Vec<bool>,
    pub cross_down: Vec<bool>,
}

impl IndicatorFrame {
    pub fn len(&self) -> usize {
        self.ma.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ma.is_empty()
    }
}

/// Compute all indicator series and drop the undefined prefix.
///
/// Returns the trimmed series and its parallel frame, both re-densified
/// from position 0. Pure: the same input always yields bit-identical
/// output.
pub fn compute_frame(series: &AlignedSeries) -> Result<(AlignedSeries, IndicatorFrame), ChartError> {
    let closes = series.closes();
    let n = closes.len();

    let ma = sma(&closes, MA_PERIOD);
    let upper: Vec<f64> = ma.iter().map(|m| m * (1.0 + ENVELOPE_WIDTH)).collect();
    let lower: Vec<f64> = ma.iter().map(|m| m * (1.0 - ENVELOPE_WIDTH)).collect();
    let momentum = rsi(&closes, RSI_PERIOD);
    let trend = macd(&closes);
    let (cross_up, cross_down) = crossovers(&trend.macd, &trend.signal);

    // Atomic retention: a position survives only with a full slow-EMA seed
    // behind it and every field finite. One undefined field drops the whole
    // row, never a single column.
    let keep: Vec<bool> = (0..n)
        .map(|i| {
            i >= WARMUP
                && ma[i].is_finite()
                && momentum[i].is_finite()
                && trend.macd[i].is_finite()
                && trend.signal[i].is_finite()
        })
        .collect();

    if !keep.iter().any(|&k| k) {
        return Err(ChartError::InsufficientHistory {
            needed: WARMUP + 1,
            got: n,
        });
    }

    let trimmed = series.filter_by(&keep);
    let frame = IndicatorFrame {
        ma: filter_f64(&ma, &keep),
        upper: filter_f64(&upper, &keep),
        lower: filter_f64(&lower, &keep),
        rsi: filter_f64(&momentum, &keep),
        macd: filter_f64(&trend.macd, &keep),
        signal: filter_f64(&trend.signal, &keep),
        histogram: filter_f64(&trend.histogram, &keep),
        cross_up: filter_bool(&cross_up, &keep),
        cross_down: filter_bool(&cross_down, &keep),
    };

    debug_assert_eq!(trimmed.len(), frame.len());
    Ok((trimmed, frame))
}

fn filter_f64(values: &[f64], keep: &[bool]) -> Vec<f64> {
    values
        .iter()
        .zip(keep)
        .filter(|(_, k)| **k)
        .map(|(v, _)| *v)
        .collect()
}

fn filter_bool(values: &[bool], keep: &[bool]) -> Vec<bool> {
    values
        .iter()
        .zip(keep)
        .filter(|(_, k)| **k)
        .map(|(v, _)| *v)
        .collect()
}
