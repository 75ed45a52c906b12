//! Accumulating a reducible into an external sink.

use std::iter;

use crate::reduce::reduce;
use crate::reducible::IntoReducible;

/// Pushes every element of `source` into `sink`, in traversal order, and
/// returns the sink.
///
/// Any [`Extend`] collection works as a sink: vectors, strings, deques, sets,
/// maps. Each element is appended exactly once. Set-like sinks apply their
/// own deduplication.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use reducers::{filter, into};
///
/// let data = vec![1, 2, 1, 2, 3];
/// assert_eq!(into(&data, Vec::<i32>::new()), data);
///
/// let distinct = into(filter(&data, |value| **value < 3), BTreeSet::<i32>::new());
/// assert_eq!(distinct.into_iter().collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub fn into<I, K>(source: I, sink: K) -> K
where
    I: IntoReducible,
    K: Extend<I::Item>,
{
    reduce(
        source,
        |mut accumulator: K, value| {
            accumulator.extend(iter::once(value));
            accumulator
        },
        sink,
    )
}
