//! Read-only view of a sampler's partition, for diagnostics and reports.
//!
//! Nothing here prints; callers decide how to lay the numbers out.

use crate::cumulative::WeightedSampler;

/// One slice of the unit interval.
///
/// `item` is selected for draws in `(range_start, range_end]` (the first band also
/// takes `0.0` itself).
#[derive(Debug, Clone, PartialEq)]
pub struct Band<'a, T> {
    pub range_start: f64,
    pub range_end: f64,
    pub weight: i64,
    /// `weight` as a percentage of the sampler's total weight.
    pub percentage: f64,
    pub item: &'a T,
}

impl<T> WeightedSampler<T> {
    /// The partition as bands, in entry order.
    pub fn describe(&self) -> Vec<Band<'_, T>> {
        let total = self.total_weight() as f64;
        let mut previous = 0.0;
        self.entries()
            .iter()
            .map(|e| {
                let band = Band {
                    range_start: previous,
                    range_end: e.cumulative_probability(),
                    weight: e.weight(),
                    percentage: e.weight() as f64 * 100.0 / total,
                    item: e.item(),
                };
                previous = band.range_end;
                band
            })
            .collect()
    }
}
