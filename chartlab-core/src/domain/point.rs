//! PricePoint — one validated daily session.

use crate::data::provider::RawRow;
use crate::error::ChartError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// OHLCV record for a single trading session.
///
/// Prices are positive and satisfy `high >= max(open, close)` and
/// `low <= min(open, close)`; volume is non-negative. [`PricePoint::from_raw`]
/// enforces this, so downstream stages never see NaN or inverted bars.
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PricePoint {
    /// Validate a raw vendor row, rejecting it with a named reason instead
    /// of letting a bad bar flow into the indicator windows as NaN.
    pub fn from_raw(row: &RawRow) -> Result<Self, ChartError> {
        let malformed = |reason: &str| ChartError::MalformedRow {
            date: row.date,
            reason: reason.to_string(),
        };

        let prices = [row.open, row.high, row.low, row.close];
        if prices.iter().any(|p| !p.is_finite()) || !row.volume.is_finite() {
            return Err(malformed("non-finite field"));
        }
        if prices.iter().any(|p| *p <= 0.0) {
            return Err(malformed("non-positive price"));
        }
        if row.volume < 0.0 {
            return Err(malformed("negative volume"));
        }
        if row.high < row.open.max(row.close) {
            return Err(malformed("high below open/close"));
        }
        if row.low > row.open.min(row.close) {
            return Err(malformed("low above open/close"));
        }

        Ok(Self {
            date: row.date,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
        })
    }

    /// A session closing at or above its open.
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }
}
