//! AlignedSeries — sessions on a dense integer position axis.

use super::PricePoint;
use serde::{Deserialize, Serialize};

/// Ordered sessions, strictly increasing by date, where the vector index is
/// the chart x-coordinate. Non-trading days are absent entirely, so the axis
/// has no gaps: `len() == max position + 1` whenever the series is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignedSeries {
    points: Vec<PricePoint>,
}

impl AlignedSeries {
    /// Wrap already-validated, date-ordered points.
    pub(crate) fn from_points(points: Vec<PricePoint>) -> Self {
        debug_assert!(
            points.windows(2).all(|w| w[0].date < w[1].date),
            "aligned sessions must be strictly increasing by date"
        );
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn get(&self, position: usize) -> Option<&PricePoint> {
        self.points.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PricePoint> {
        self.points.iter()
    }

    /// Close prices in position order.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Retain the positions flagged in `keep`, re-densifying from 0.
    pub(crate) fn filter_by(&self, keep: &[bool]) -> Self {
        debug_assert_eq!(keep.len(), self.points.len());
        let points = self
            .points
            .iter()
            .zip(keep)
            .filter(|(_, k)| **k)
            .map(|(p, _)| p.clone())
            .collect();
        Self { points }
    }
}

impl<'a> IntoIterator for &'a AlignedSeries {
    type Item = &'a PricePoint;
    type IntoIter = std::slice::Iter<'a, PricePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
