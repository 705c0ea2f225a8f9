//! Price provider trait and structured error types.
//!
//! Providers abstract over data sources (CSV files, synthetic walks) so the
//! CLI can swap implementations and tests can stay offline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw daily OHLCV row from a provider, before validation.
///
/// Carries no invariants yet: vendors ship inverted bars, zero prices, and
/// rows on non-session days. Validation happens in
/// [`crate::domain::PricePoint::from_raw`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRow {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Structured error types for data retrieval.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no data file for '{symbol}' at {path}")]
    FileNotFound { symbol: String, path: String },

    #[error("csv error: {0}")]
    Csv(String),

    #[error("bad date '{value}': expected YYYY-MM-DD")]
    BadDate { value: String },

    #[error("provider error: {0}")]
    Other(String),
}

/// Where the rows came from. Reported in the CLI summary so synthetic runs
/// are never mistaken for market data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    CsvFile,
    Synthetic,
}

/// Result of a successful fetch for a single symbol.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub symbol: String,
    pub rows: Vec<RawRow>,
    pub source: DataSource,
}

/// Trait for price providers.
///
/// Implementations handle the specifics of one source; callers decide the
/// fallback order.
pub trait PriceProvider {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily OHLCV rows for a symbol over an inclusive date range.
    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<FetchResult, ProviderError>;
}
