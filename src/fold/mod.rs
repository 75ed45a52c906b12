//! Associative folding.
//!
//! [`reduce`](crate::reduce()) threads a single accumulator through every
//! element. Folding instead allows the source to be split into independent
//! subranges, each reduced from an identity seed, with the partial results
//! merged by an associative [`Combine`] operation. Splittable sources can
//! therefore be folded in parallel by an [`Executor`].
//!
//! # Caller Contract
//!
//! The library does not check associativity. For the result of a fold to
//! equal the result of the corresponding reduce, the reducing function and
//! the combine operation must agree on adjacent subranges:
//!
//! ```text
//! combine(reduce(xs, identity), reduce(ys, identity)) == reduce(xs ++ ys, identity)
//! ```
//!
//! Partial results are always merged left to right, so commutativity is not
//! required. When the contract is violated the result depends on the split
//! granularity.
//!
//! # Examples
//!
//! ```rust
//! use reducers::fold::{combiner, fold};
//!
//! let data: Vec<u64> = (1..=100).collect();
//! let total = fold(&data, |seed: u64, value| seed + value, &combiner(|| 0, |a, b| a + b));
//! assert_eq!(total, 5050);
//! ```

mod config;
mod executor;

pub use config::{ConfigError, FoldConfig, Grain};
#[cfg(feature = "rayon")]
pub use executor::RayonExecutor;
pub use executor::{DefaultExecutor, Executor, Sequential};

use crate::reducible::{IntoReducible, Reducible};

/// The merge operation of a fold, together with its identity element.
///
/// # Laws
///
/// ```text
/// combine(identity(), a) == a
/// combine(a, identity()) == a
/// combine(combine(a, b), c) == combine(a, combine(b, c))
/// ```
pub trait Combine<S> {
    /// Returns the identity element; every leaf of a fold starts from it.
    fn identity(&self) -> S;

    /// Merges the partial results of two adjacent subranges.
    fn combine(&self, left: S, right: S) -> S;
}

/// A [`Combine`] built from an identity closure and a merge closure.
///
/// Created by [`combiner`].
#[derive(Debug, Clone, Copy)]
pub struct CombineFn<I, M> {
    identity: I,
    merge: M,
}

/// Builds a [`Combine`] from an identity producer and a merge function.
///
/// # Examples
///
/// ```rust
/// use reducers::fold::{Combine, combiner};
///
/// let longest = combiner(String::new, |left: String, right: String| {
///     if right.len() > left.len() { right } else { left }
/// });
/// assert_eq!(longest.identity(), "");
/// assert_eq!(longest.combine("ab".into(), "abc".into()), "abc");
/// ```
pub const fn combiner<S, I, M>(identity: I, merge: M) -> CombineFn<I, M>
where
    I: Fn() -> S,
    M: Fn(S, S) -> S,
{
    CombineFn { identity, merge }
}

impl<S, I, M> Combine<S> for CombineFn<I, M>
where
    I: Fn() -> S,
    M: Fn(S, S) -> S,
{
    #[inline]
    fn identity(&self) -> S {
        (self.identity)()
    }

    #[inline]
    fn combine(&self, left: S, right: S) -> S {
        (self.merge)(left, right)
    }
}

impl<S, C: Combine<S> + ?Sized> Combine<S> for &C {
    #[inline]
    fn identity(&self) -> S {
        (**self).identity()
    }

    #[inline]
    fn combine(&self, left: S, right: S) -> S {
        (**self).combine(left, right)
    }
}

/// A [`Reducible`] that also supports associative, splittable folding.
///
/// Sources that cannot be split implement this by reducing sequentially
/// from `combine.identity()`. Transformers implement it whenever their
/// source does, rewriting `reducer` exactly as they do for
/// [`Reducible::reduce`] and passing `combine` and `executor` through.
pub trait Foldable: Reducible + Sized {
    /// Folds the source with `reducer`, merging partial results with
    /// `combine`, scheduling independent halves on `executor`.
    fn fold_with<S, R, C, E>(self, reducer: R, combine: &C, executor: &E) -> S
    where
        S: Send,
        R: Fn(S, Self::Item) -> S + Sync,
        C: Combine<S> + Sync,
        E: Executor;
}

/// Folds `source` on the [`DefaultExecutor`].
///
/// The result of folding an empty source is `combine.identity()`.
pub fn fold<I, S, R, C>(source: I, reducer: R, combine: &C) -> S
where
    I: IntoReducible,
    I::Reducible: Foldable,
    S: Send,
    R: Fn(S, I::Item) -> S + Sync,
    C: Combine<S> + Sync,
{
    fold_with(source, reducer, combine, &DefaultExecutor::default())
}

/// Folds `source` on the given `executor`.
///
/// # Examples
///
/// ```rust
/// use reducers::fold::{FoldConfig, Sequential, combiner, fold_with};
///
/// let executor = Sequential::with_config(FoldConfig::with_grain(2).unwrap());
/// let data = ["a", "b", "c", "d", "e"];
/// let joined = fold_with(
///     &data,
///     |seed: String, value| seed + *value,
///     &combiner(String::new, |left: String, right: String| left + &right),
///     &executor,
/// );
/// assert_eq!(joined, "abcde");
/// ```
pub fn fold_with<I, S, R, C, E>(source: I, reducer: R, combine: &C, executor: &E) -> S
where
    I: IntoReducible,
    I::Reducible: Foldable,
    S: Send,
    R: Fn(S, I::Item) -> S + Sync,
    C: Combine<S> + Sync,
    E: Executor,
{
    source.into_reducible().fold_with(reducer, combine, executor)
}
