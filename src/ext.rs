//! Method-chaining form of pipelines.

use crate::fold::{Combine, DefaultExecutor, Foldable};
use crate::reducible::{IntoReducible, Reducible};
use crate::transformers::{Collect, Filter, Map};

/// Chained pipeline construction on every [`Reducible`].
///
/// Each method builds the same value as the corresponding free function,
/// so `source.map(f).filter(p)` is `filter(map(source, f), p)`.
///
/// Containers and ranges are adapted first, with
/// [`IntoReducible::into_reducible`] or one of the
/// [`sources`](crate::sources) constructors. The extension is not offered on
/// [`IntoReducible`] directly, so it never competes with the [`Iterator`]
/// methods of the same names on ranges.
///
/// # Examples
///
/// ```rust
/// use reducers::{IntoReducible, Reducible, ReducibleExt};
///
/// let data = vec![1, 2, 3, 4, 5, 6];
/// let total = (&data)
///     .into_reducible()
///     .filter(|value| **value % 2 == 0)
///     .map(|value| value * 10)
///     .reduce(|total, value| total + value, 0);
/// assert_eq!(total, 120);
/// ```
pub trait ReducibleExt: Reducible + Sized {
    /// Chained [`map`](crate::map()).
    #[inline]
    fn map<F, U>(self, function: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, function)
    }

    /// Chained [`filter`](crate::filter()).
    #[inline]
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Chained [`collect`](crate::collect()).
    #[inline]
    fn collect<F, N>(self, expand: F) -> Collect<Self, F>
    where
        F: Fn(Self::Item) -> N,
        N: IntoReducible,
    {
        Collect::new(self, expand)
    }

    /// Chained [`fold`](crate::fold::fold()) on the [`DefaultExecutor`].
    ///
    /// Use [`Foldable::fold_with`] to choose the executor.
    fn fold<S, R, C>(self, reducer: R, combine: &C) -> S
    where
        Self: Foldable,
        S: Send,
        R: Fn(S, Self::Item) -> S + Sync,
        C: Combine<S> + Sync,
    {
        self.fold_with(reducer, combine, &DefaultExecutor::default())
    }

    /// Chained [`into`](crate::into()).
    fn into_sink<K>(self, sink: K) -> K
    where
        K: Extend<Self::Item>,
    {
        crate::sink::into(self, sink)
    }

    /// Chained [`reduce_monoid`](crate::typeclass::reduce_monoid()).
    #[cfg(feature = "typeclass")]
    fn reduce_monoid(self) -> Self::Item
    where
        Self::Item: crate::typeclass::Monoid,
    {
        crate::typeclass::reduce_monoid(self)
    }

    /// Chained [`fold_monoid`](crate::typeclass::fold_monoid()).
    #[cfg(feature = "typeclass")]
    fn fold_monoid(self) -> Self::Item
    where
        Self: Foldable,
        Self::Item: crate::typeclass::Monoid + Send,
    {
        crate::typeclass::fold_monoid(self)
    }
}

impl<R: Reducible> ReducibleExt for R {}
