//! `fukubiki`: weighted discrete sampling.
//!
//! A [`WeightedSampler`] is built once from `(item, weight)` pairs and then draws items
//! with probability proportional to their integer weight. Internally it is an ordered
//! cumulative partition of `[0, 1]`; a uniform draw selects the first entry whose
//! boundary is at or above it.
//!
//! Exposed modules:
//! - `cumulative`: the sampler (construction, single and bulk draws, selection strategy).
//! - `describe`: read-only bands of the partition for diagnostics.
//! - `error`: construction errors.
//!
//! ```
//! use fukubiki::WeightedSampler;
//!
//! let s = WeightedSampler::new([("X", 1), ("Y", 3)])?;
//! assert_eq!(*s.pick(0.1), "X");
//! assert_eq!(*s.pick(0.5), "Y");
//!
//! let counts = s.sample_many(1_000);
//! assert_eq!(counts.values().sum::<usize>(), 1_000);
//! # Ok::<(), fukubiki::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod cumulative;
pub mod describe;
pub mod error;

pub use cumulative::{Entry, Selection, WeightedSampler};
pub use describe::Band;
pub use error::{Error, InvalidWeight};
