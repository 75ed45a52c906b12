//! Monoid-driven reduce and fold.
//!
//! When the element type of a pipeline is itself a [`Monoid`], the reducing
//! function, the seed and the combine operation can all be derived from it.

use std::fmt;
use std::marker::PhantomData;

use super::monoid::Monoid;
use crate::fold::{Combine, DefaultExecutor, Executor, Foldable};
use crate::reducible::{IntoReducible, Reducible};

/// The [`Combine`] of a monoid: identity [`Monoid::empty`], merge
/// [`Semigroup::combine`](super::Semigroup::combine).
pub struct MonoidCombine<M> {
    monoid: PhantomData<fn() -> M>,
}

impl<M> MonoidCombine<M> {
    /// Creates the combine operation for `M`.
    pub const fn new() -> Self {
        Self {
            monoid: PhantomData,
        }
    }
}

impl<M> Default for MonoidCombine<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Clone for MonoidCombine<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for MonoidCombine<M> {}

impl<M> fmt::Debug for MonoidCombine<M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("MonoidCombine")
    }
}

impl<M: Monoid> Combine<M> for MonoidCombine<M> {
    #[inline]
    fn identity(&self) -> M {
        M::empty()
    }

    #[inline]
    fn combine(&self, left: M, right: M) -> M {
        left.combine(right)
    }
}

/// Reduces `source` over the monoid of its elements.
///
/// Equivalent to `reduce(source, M::combine, M::empty())`. The element type
/// must be exactly `M`:
///
/// ```rust,compile_fail
/// use reducers::typeclass::{Sum, reduce_monoid};
///
/// let data = [1, 2, 3];
/// let _: Sum<i32> = reduce_monoid(&data);
/// ```
///
/// # Examples
///
/// ```rust
/// use reducers::{map, typeclass::{Sum, reduce_monoid}};
///
/// let data = [1, 2, 3, 4, 5];
/// let total: Sum<i32> = reduce_monoid(map(&data, |value| Sum::new(*value)));
/// assert_eq!(total, Sum::new(15));
/// ```
pub fn reduce_monoid<M, I>(source: I) -> M
where
    M: Monoid,
    I: IntoReducible<Item = M>,
{
    source
        .into_reducible()
        .reduce(|accumulator: M, element| accumulator.combine(element), M::empty())
}

/// Folds `source` over the monoid of its elements on the [`DefaultExecutor`].
///
/// Equivalent to `fold(source, M::combine, MonoidCombine::<M>::new())`.
///
/// # Examples
///
/// ```rust
/// use reducers::{map, typeclass::{Max, fold_monoid}};
///
/// let readings = [3, 11, 7];
/// let peak: Max<i32> = fold_monoid(map(&readings, |reading| Max::new(*reading)));
/// assert_eq!(peak, Max::new(11));
/// ```
pub fn fold_monoid<M, I>(source: I) -> M
where
    M: Monoid + Send,
    I: IntoReducible<Item = M>,
    I::Reducible: Foldable,
{
    fold_monoid_with(source, &DefaultExecutor::default())
}

/// Folds `source` over the monoid of its elements on `executor`.
pub fn fold_monoid_with<M, I, E>(source: I, executor: &E) -> M
where
    M: Monoid + Send,
    I: IntoReducible<Item = M>,
    I::Reducible: Foldable,
    E: Executor,
{
    source.into_reducible().fold_with(
        |accumulator: M, element: M| accumulator.combine(element),
        &MonoidCombine::<M>::new(),
        executor,
    )
}
