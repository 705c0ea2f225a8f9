//! Relative Strength Index, rolling-mean variant.
//!
//! Average gain and average loss are trailing simple means over the last
//! `period` one-session changes (not Wilder's recursive smoothing).
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss). The change at position 0
//! is undefined, so the first valid output is at index `period`.
//!
//! Edge conventions, applied consistently:
//! - `avg_loss == 0`, `avg_gain > 0` → 100 (saturated)
//! - `avg_gain == 0`, `avg_loss > 0` → 0
//! - both zero (a flat window)       → 50, neutral; a flat series stays
//!   renderable instead of having every row dropped

/// RSI over the trailing `period` changes.
pub fn rsi(closes: &[f64], period: usize) -> Vec<f64> {
    assert!(period >= 1, "rsi period must be >= 1");
    let n = closes.len();
    let mut out = vec![f64::NAN; n];
    if n < period + 1 {
        return out;
    }

    let mut gains = vec![0.0; n];
    let mut losses = vec![0.0; n];
    for i in 1..n {
        let delta = closes[i] - closes[i - 1];
        gains[i] = delta.max(0.0);
        losses[i] = (-delta).max(0.0);
    }

    let mut gain_sum: f64 = gains[1..=period].iter().sum();
    let mut loss_sum: f64 = losses[1..=period].iter().sum();
    out[period] = strength(gain_sum / period as f64, loss_sum / period as f64);

    for i in (period + 1)..n {
        // Clamp at zero: the rolling subtract can leave a negative residue
        // on the order of 1e-16, which would push RS outside [0, 100].
        gain_sum = (gain_sum + gains[i] - gains[i - period]).max(0.0);
        loss_sum = (loss_sum + losses[i] - losses[i - period]).max(0.0);
        out[i] = strength(gain_sum / period as f64, loss_sum / period as f64);
    }

    out
}

fn strength(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 && avg_gain == 0.0 {
        50.0 // flat window, no information
    } else if avg_loss == 0.0 {
        100.0
    } else if avg_gain == 0.0 {
        0.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}
