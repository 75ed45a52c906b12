//! The reduce entry point.

use crate::reducible::{IntoReducible, Reducible};

/// Reduces `source` with `function`, starting from `seed`.
///
/// `source` may be any [`Reducible`] or anything adapted by
/// [`IntoReducible`]: borrowed slices, vectors and arrays, owned containers,
/// ranges and options. Elements are visited exactly once, in source order,
/// on the calling thread.
///
/// The reducing function receives the seed first and the element second.
///
/// # Examples
///
/// ```rust
/// use reducers::reduce;
///
/// let data = vec![1, 2, 3, 4, 5];
/// assert_eq!(reduce(&data, |seed, value| seed + value, 0), 15);
///
/// let empty: Vec<i32> = Vec::new();
/// assert_eq!(reduce(&empty, |seed, value| seed + value, 42), 42);
/// ```
pub fn reduce<I, S, F>(source: I, function: F, seed: S) -> S
where
    I: IntoReducible,
    F: FnMut(S, I::Item) -> S,
{
    source.into_reducible().reduce(function, seed)
}
