//! MACD — moving average convergence/divergence.
//!
//! `macd = ewm(close, 12) - ewm(close, 26)`, `signal = ewm(macd, 9)`,
//! `histogram = macd - signal`. Crossover flags compare consecutive
//! positions of the macd line against the signal line.

use super::ema::ewm_mean;

pub const FAST_SPAN: usize = 12;
pub const SLOW_SPAN: usize = 26;
pub const SIGNAL_SPAN: usize = 9;

/// The three MACD series, all the same length as the input.
#[derive(Debug, Clone, Default)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Compute MACD, signal, and histogram over the full close series.
pub fn macd(closes: &[f64]) -> MacdSeries {
    let fast = ewm_mean(closes, FAST_SPAN);
    let slow = ewm_mean(closes, SLOW_SPAN);
    let line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal = ewm_mean(&line, SIGNAL_SPAN);
    let histogram = line.iter().zip(&signal).map(|(m, s)| m - s).collect();

    MacdSeries {
        macd: line,
        signal,
        histogram,
    }
}

/// Crossover flags between the macd and signal lines.
///
/// Cross-up at i iff `macd[i] > signal[i]` and `macd[i-1] <= signal[i-1]`;
/// cross-down is the mirror. Both are false at position 0 (no prior
/// position to compare against).
pub fn crossovers(macd: &[f64], signal: &[f64]) -> (Vec<bool>, Vec<bool>) {
    debug_assert_eq!(macd.len(), signal.len());
    let n = macd.len();
    let mut up = vec![false; n];
    let mut down = vec![false; n];

    for i in 1..n {
        up[i] = macd[i] > signal[i] && macd[i - 1] <= signal[i - 1];
        down[i] = macd[i] < signal[i] && macd[i - 1] >= signal[i - 1];
    }

    (up, down)
}
