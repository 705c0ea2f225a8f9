//! Pipeline error taxonomy.
//!
//! Every variant is terminal for a single invocation: the pipeline aborts
//! and reports, it does not retry. Recovery (different symbol, wider date
//! range, fixed input file) is the caller's call.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The raw table was empty, or no row survived calendar filtering.
    #[error("no price data for '{symbol}' in the requested range")]
    NoData { symbol: String },

    /// The date range is too short to produce one fully-defined indicator row.
    #[error("insufficient history: need at least {needed} sessions for a fully seeded indicator row, got {got}")]
    InsufficientHistory { needed: usize, got: usize },

    /// An OHLCV row violates the high/low ordering or positivity invariants.
    #[error("malformed session on {date}: {reason}")]
    MalformedRow { date: NaiveDate, reason: String },
}
