//! Session alignment — raw vendor rows onto the dense position axis.
//!
//! Vendor tables can contain rows on non-session days (feed artifacts) and
//! can miss real sessions. Alignment only filters against the calendar and
//! never fabricates missing sessions; positions are re-indexed densely by
//! output order.

use crate::data::{RawRow, TradingCalendar};
use crate::domain::{AlignedSeries, PricePoint};
use crate::error::ChartError;

/// Filter raw rows to calendar sessions and assign dense positions.
///
/// Rows are canonicalized first: sorted by date, first occurrence wins on
/// duplicates. Each kept row is validated; a malformed row aborts the run
/// instead of feeding NaN into the indicator windows.
pub fn align_sessions(
    rows: &[RawRow],
    calendar: &TradingCalendar,
    symbol: &str,
) -> Result<AlignedSeries, ChartError> {
    if rows.is_empty() {
        return Err(ChartError::NoData {
            symbol: symbol.to_string(),
        });
    }

    let mut canonical: Vec<&RawRow> = rows.iter().collect();
    canonical.sort_by_key(|r| r.date);
    canonical.dedup_by_key(|r| r.date);

    let mut points = Vec::with_capacity(canonical.len());
    for row in &canonical {
        if !calendar.contains(row.date) {
            continue;
        }
        points.push(PricePoint::from_raw(row)?);
    }

    if points.is_empty() {
        return Err(ChartError::NoData {
            symbol: symbol.to_string(),
        });
    }

    log::debug!(
        "aligned {symbol}: {} of {} rows are calendar sessions",
        points.len(),
        rows.len()
    );

    Ok(AlignedSeries::from_points(points))
}
