//! Exponentially weighted mean (span form).
//!
//! Recurrence: `ema[0] = values[0]`,
//! `ema[i] = alpha * values[i] + (1 - alpha) * ema[i-1]`,
//! `alpha = 2 / (span + 1)`, no adjust correction.
//!
//! Every output position carries a value; the seed is the first value, not
//! a leading SMA. How much history counts as a *full* seed is the caller's
//! decision — [`crate::frame`] drops the first `span - 1` positions of the
//! slowest span it uses.

/// Exponentially weighted mean with the given span.
pub fn ewm_mean(values: &[f64], span: usize) -> Vec<f64> {
    assert!(span >= 1, "ewm span must be >= 1");
    let n = values.len();
    let mut out = Vec::with_capacity(n);
    if n == 0 {
        return out;
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut prev = values[0];
    out.push(prev);

    for &v in &values[1..] {
        prev = alpha * v + (1.0 - alpha) * prev;
        out.push(prev);
    }

    out
}
