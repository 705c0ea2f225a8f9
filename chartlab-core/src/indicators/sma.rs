//! Simple moving average.
//!
//! Trailing mean of the last `period` values, inclusive. The first
//! `period - 1` outputs are NaN.

/// Rolling mean over `period` values.
pub fn sma(values: &[f64], period: usize) -> Vec<f64> {
    assert!(period >= 1, "sma period must be >= 1");
    let n = values.len();
    let mut out = vec![f64::NAN; n];
    if n < period {
        return out;
    }

    let mut sum: f64 = values[..period].iter().sum();
    out[period - 1] = sum / period as f64;

    for i in period..n {
        sum += values[i] - values[i - period];
        out[i] = sum / period as f64;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn sma_5_basic() {
        let values = [10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0];
        let result = sma(&values, 5);

        assert_eq!(result.len(), 7);
        for i in 0..4 {
            assert!(result[i].is_nan(), "expected NaN at index {i}");
        }
        assert_approx(result[4], 12.0, DEFAULT_EPSILON);
        assert_approx(result[5], 13.0, DEFAULT_EPSILON);
        assert_approx(result[6], 14.0, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_1_is_identity() {
        let values = [100.0, 200.0, 300.0];
        let result = sma(&values, 1);
        assert_eq!(result, vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn sma_matches_window_mean_exactly() {
        // Rolling add/subtract must stay within float tolerance of the
        // directly computed window mean.
        let values: Vec<f64> = (0..200).map(|i| 100.0 + (i as f64 * 0.7).sin() * 15.0).collect();
        let period = 10;
        let result = sma(&values, period);
        for i in (period - 1)..values.len() {
            let mean: f64 =
                values[(i + 1 - period)..=i].iter().sum::<f64>() / period as f64;
            assert_approx(result[i], mean, 1e-9);
        }
    }

    #[test]
    fn sma_too_few_values() {
        let result = sma(&[10.0, 11.0], 5);
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn sma_flat_input() {
        let result = sma(&[100.0; 30], 10);
        for i in 9..30 {
            assert_approx(result[i], 100.0, DEFAULT_EPSILON);
        }
    }
}
