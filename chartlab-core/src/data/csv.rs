//! CSV-backed price provider.
//!
//! Expects `<dir>/<SYMBOL>.csv` with header `date,open,high,low,close,volume`
//! and dates formatted `%Y-%m-%d`. Rows outside the requested range are
//! skipped at read time.

use super::provider::{DataSource, FetchResult, PriceProvider, ProviderError, RawRow};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct CsvRecord {
    date: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

pub struct CsvProvider {
    dir: PathBuf,
}

impl CsvProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, symbol: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", symbol.to_uppercase()))
    }
}

impl PriceProvider for CsvProvider {
    fn name(&self) -> &str {
        "csv"
    }

    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<FetchResult, ProviderError> {
        let path = self.path_for(symbol);
        if !path.exists() {
            return Err(ProviderError::FileNotFound {
                symbol: symbol.to_string(),
                path: path.display().to_string(),
            });
        }

        let mut reader =
            csv::Reader::from_path(&path).map_err(|e| ProviderError::Csv(e.to_string()))?;

        let mut rows = Vec::new();
        for record in reader.deserialize::<CsvRecord>() {
            let rec = record.map_err(|e| ProviderError::Csv(e.to_string()))?;
            let date = NaiveDate::parse_from_str(&rec.date, "%Y-%m-%d").map_err(|_| {
                ProviderError::BadDate {
                    value: rec.date.clone(),
                }
            })?;
            if date < start || date > end {
                continue;
            }
            rows.push(RawRow {
                date,
                open: rec.open,
                high: rec.high,
                low: rec.low,
                close: rec.close,
                volume: rec.volume,
            });
        }

        log::debug!(
            "loaded {} rows for {symbol} from {}",
            rows.len(),
            path.display()
        );

        Ok(FetchResult {
            symbol: symbol.to_string(),
            rows,
            source: DataSource::CsvFile,
        })
    }
}
