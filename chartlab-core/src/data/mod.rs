//! Data layer — price providers and the trading calendar.
//!
//! Retrieval and calendar construction are collaborator concerns; the
//! pipeline itself only ever sees `RawRow` slices and a `TradingCalendar`.

pub mod calendar;
pub mod csv;
pub mod provider;
pub mod synthetic;

pub use calendar::TradingCalendar;
pub use provider::{DataSource, FetchResult, PriceProvider, ProviderError, RawRow};
pub use self::csv::CsvProvider;
pub use synthetic::SyntheticProvider;
