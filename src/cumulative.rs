//! Cumulative-partition sampling.
//!
//! Every item owns a slice `(previous, cumulative]` of the unit interval, where
//! `cumulative` is the running sum of normalized weights up to and including that item.
//! A uniform draw `r` in `[0, 1)` selects the first entry with `r <= cumulative`.
//!
//! The last boundary is pinned to exactly `1.0` after the running sum is built, so
//! rounding in the sum can never leave the top of the range uncovered.
//!
//! Notes:
//! - `*_with_rng` entrypoints take a caller-supplied RNG for deterministic testing/benchmarking.
//! - The plain entrypoints use `rand::rng()`, which is thread-local, so one sampler can be
//!   shared across threads and drawn from without locking.

use std::collections::HashMap;
use std::hash::Hash;

use rand::prelude::*;

use crate::error::{Error, InvalidWeight};

/// One item of the partition.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T> {
    item: T,
    weight: i64,
    cumulative_probability: f64,
}

impl<T> Entry<T> {
    /// The item this entry selects.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// The weight exactly as supplied at construction.
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Upper boundary of this entry's slice of `[0, 1]`.
    pub fn cumulative_probability(&self) -> f64 {
        self.cumulative_probability
    }
}

/// How a draw is located in the partition.
///
/// Both strategies select the same entry for every draw; they differ only in cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    /// Scan entries in order. O(n), fastest for small item counts.
    #[default]
    Linear,
    /// Binary search over the monotonic boundaries. O(log n).
    Binary,
}

impl Selection {
    /// Index of the first entry whose boundary is `>= u`, or the last index if none is.
    ///
    /// `entries` must be non-empty.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn locate<T>(self, entries: &[Entry<T>], u: f64) -> usize {
        let found = match self {
            Selection::Linear => entries.iter().position(|e| u <= e.cumulative_probability),
            Selection::Binary => {
                // Negated so a NaN draw runs off the end, same as the scan.
                let i = entries.partition_point(|e| !(u <= e.cumulative_probability));
                (i < entries.len()).then_some(i)
            }
        };
        found.unwrap_or(entries.len() - 1)
    }
}

/// An immutable weighted sampler over items of type `T`.
///
/// Items are drawn with probability `weight / total_weight`. Entry order is the
/// iteration order of the construction input and never changes.
#[derive(Debug, Clone)]
pub struct WeightedSampler<T> {
    entries: Vec<Entry<T>>,
    total_weight: i64,
    selection: Selection,
}

impl<T> WeightedSampler<T> {
    /// Build a sampler from `(item, weight)` pairs.
    ///
    /// Any map or sequence of pairs works; its iteration order becomes the entry order
    /// (for a `HashMap` that order is unspecified but fixed for this sampler).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidWeight`] if a weight is negative, the weights overflow `i64`, or
    /// the total is zero (which includes empty input).
    pub fn new<I>(items_with_weights: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (T, i64)>,
    {
        let pairs: Vec<(T, i64)> = items_with_weights.into_iter().collect();
        let total_weight = total_of(&pairs)
            .inspect_err(|reason| tracing::debug!(%reason, "rejecting sampler weights"))?;

        let total = total_weight as f64;
        let mut cumulative = 0.0_f64;
        let mut entries: Vec<Entry<T>> = pairs
            .into_iter()
            .map(|(item, weight)| {
                cumulative += weight as f64 / total;
                Entry {
                    item,
                    weight,
                    // The running sum can round above 1.0 before the last entry.
                    cumulative_probability: cumulative.min(1.0),
                }
            })
            .collect();

        if let Some(last) = entries.last_mut() {
            last.cumulative_probability = 1.0;
        }

        tracing::debug!(entries = entries.len(), total_weight, "built weighted sampler");

        Ok(Self {
            entries,
            total_weight,
            selection: Selection::default(),
        })
    }

    /// Use `selection` to locate draws in the partition.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// The lookup strategy in use.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Sum of all weights supplied at construction.
    pub fn total_weight(&self) -> i64 {
        self.total_weight
    }

    /// Entries in selection order.
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// The item selected by the draw `u`.
    ///
    /// Returns the first entry with `u <= cumulative_probability`. A draw that matches no
    /// entry (NaN, or `u > 1.0` from a misbehaving source) resolves to the last item.
    pub fn pick(&self, u: f64) -> &T {
        &self.entries[self.selection.locate(&self.entries, u)].item
    }

    /// Draw one item using the thread-local RNG.
    #[inline]
    pub fn sample(&self) -> &T {
        let mut rng = rand::rng();
        self.sample_with_rng(&mut rng)
    }

    /// Draw one item using a caller-supplied RNG.
    #[inline]
    pub fn sample_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        self.pick(rng.random::<f64>())
    }
}

impl<T: Clone + Eq + Hash> WeightedSampler<T> {
    /// Draw `count` items and tally how often each came up.
    ///
    /// Items never drawn are absent from the result.
    pub fn sample_many(&self, count: usize) -> HashMap<T, usize> {
        let mut rng = rand::rng();
        self.sample_many_with_rng(count, &mut rng)
    }

    /// [`sample_many`](Self::sample_many) with a caller-supplied RNG.
    pub fn sample_many_with_rng<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> HashMap<T, usize> {
        let mut counts = HashMap::new();
        for _ in 0..count {
            *counts.entry(self.sample_with_rng(rng).clone()).or_insert(0) += 1;
        }
        counts
    }
}

impl<T: Clone> Distribution<T> for WeightedSampler<T> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.sample_with_rng(rng).clone()
    }
}

fn total_of<T>(pairs: &[(T, i64)]) -> Result<i64, InvalidWeight> {
    let mut total = 0_i64;
    for &(_, weight) in pairs {
        if weight < 0 {
            return Err(InvalidWeight::Negative { weight });
        }
        total = total.checked_add(weight).ok_or(InvalidWeight::Overflow)?;
    }
    if total <= 0 {
        return Err(InvalidWeight::NonPositiveTotal { total });
    }
    Ok(total)
}
