//! Synthetic price provider — seeded random walk for demos and offline runs.
//!
//! Deterministic per seed, so the same invocation always produces the same
//! chart. Sessions land on weekdays only, mirroring what a daily equity
//! feed would deliver.

use super::calendar::TradingCalendar;
use super::provider::{DataSource, FetchResult, PriceProvider, ProviderError, RawRow};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct SyntheticProvider {
    seed: u64,
    start_price: f64,
}

impl SyntheticProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            start_price: 100.0,
        }
    }

    /// Derive a stable seed from the symbol so "OKLO" always walks the same
    /// path.
    pub fn from_symbol(symbol: &str) -> Self {
        let seed = symbol
            .bytes()
            .fold(0xcbf2_9ce4_8422_2325u64, |acc, b| {
                (acc ^ b as u64).wrapping_mul(0x0100_0000_01b3)
            });
        Self::new(seed)
    }

    pub fn with_start_price(mut self, price: f64) -> Self {
        self.start_price = price;
        self
    }
}

impl PriceProvider for SyntheticProvider {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<FetchResult, ProviderError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut prev_close = self.start_price;
        let mut rows = Vec::new();

        for date in TradingCalendar::weekdays(start, end).iter() {
            let drift: f64 = rng.gen_range(-0.03..0.03);
            let open = prev_close;
            let close = (prev_close * (1.0 + drift)).max(0.01);
            let high = open.max(close) * (1.0 + rng.gen_range(0.0..0.01));
            let low = open.min(close) * (1.0 - rng.gen_range(0.0..0.01));
            let volume = rng.gen_range(100_000.0..5_000_000.0f64).round();

            rows.push(RawRow {
                date,
                open,
                high,
                low,
                close,
                volume,
            });
            prev_close = close;
        }

        Ok(FetchResult {
            symbol: symbol.to_string(),
            rows,
            source: DataSource::Synthetic,
        })
    }
}
