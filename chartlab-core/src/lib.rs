//! ChartLab Core — session alignment, indicator engine, chart geometry.
//!
//! The pipeline is three pure stages run strictly in order:
//! - align: filter raw vendor rows to the trading calendar, densify positions
//! - frame: MA + envelope, RSI, MACD with signal line and crossover flags
//! - geometry: candles, volume bars, envelope segments, markers, axis labels
//!
//! Data flows one way. No stage mutates its input or reads back from a
//! downstream stage, and every produced value is immutable after
//! construction. I/O lives in the `data` module (providers); the pipeline
//! itself is in-memory only.

pub mod align;
pub mod data;
pub mod domain;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod indicators;

pub use align::align_sessions;
pub use domain::{AlignedSeries, PricePoint};
pub use error::ChartError;
pub use frame::{compute_frame, IndicatorFrame};
pub use geometry::{build_geometry, ChartGeometry};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: pipeline output types are Send + Sync, so a UI
    /// worker thread can own them without retrofitting.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::PricePoint>();
        require_sync::<domain::PricePoint>();
        require_send::<domain::AlignedSeries>();
        require_sync::<domain::AlignedSeries>();
        require_send::<frame::IndicatorFrame>();
        require_sync::<frame::IndicatorFrame>();
        require_send::<geometry::ChartGeometry>();
        require_sync::<geometry::ChartGeometry>();
        require_send::<error::ChartError>();
        require_sync::<error::ChartError>();
    }
}
