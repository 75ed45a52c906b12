//! Source adapters.
//!
//! These are the leaves of every pipeline:
//!
//! - [`RangeReducible`]: a borrowed, random-access slice. Splittable, so it
//!   folds in parallel.
//! - [`IteratorReducible`]: any [`Iterator`]. Folds sequentially.
//! - [`Sequence`]: an arithmetic progression `start, start + step, ...`
//!   bounded by an exclusive end. Folds sequentially.
//!
//! # Examples
//!
//! ```rust
//! use reducers::{reduce, sources::sequence};
//!
//! let odds = sequence(1, 10, 2).unwrap();
//! assert_eq!(reduce(odds, |seed, value| seed + value, 0), 25);
//! ```

mod iterator;
mod range;
mod sequence;

pub use iterator::{IteratorReducible, from_iterator};
pub use range::{RangeReducible, from_slice};
pub use sequence::{Sequence, SequenceError, Step, sequence};
