//! Curried pipeline stages.
//!
//! Each function here takes every argument of its free-function counterpart
//! except the source, and returns a closure that accepts the source. The
//! closures compose with [`pipe!`](crate::pipe!):
//!
//! ```rust
//! use reducers::compose::stages::{collect, filter, into};
//! use reducers::pipe;
//!
//! let batches = vec![vec![3, 8], vec![], vec![5, 10, 12]];
//! let large = pipe!(
//!     &batches,
//!     collect(|batch: &Vec<i32>| batch.clone()),
//!     filter(|value: &i32| *value > 4),
//!     into(Vec::<i32>::new()),
//! );
//! assert_eq!(large, vec![8, 5, 10, 12]);
//! ```
//!
//! Closure parameters need type annotations: the stage is built before the
//! source it will be applied to is known.

use crate::fold::{Combine, Foldable};
use crate::reducible::IntoReducible;
use crate::transformers::{Collect, Filter, Map};

/// Stage form of [`map`](crate::transformers::map()).
pub fn map<I, F, U>(function: F) -> impl FnOnce(I) -> Map<I::Reducible, F>
where
    I: IntoReducible,
    F: Fn(I::Item) -> U,
{
    move |source| crate::transformers::map(source, function)
}

/// Stage form of [`filter`](crate::transformers::filter()).
pub fn filter<I, P>(predicate: P) -> impl FnOnce(I) -> Filter<I::Reducible, P>
where
    I: IntoReducible,
    P: Fn(&I::Item) -> bool,
{
    move |source| crate::transformers::filter(source, predicate)
}

/// Stage form of [`collect`](crate::transformers::collect()).
pub fn collect<I, F, N>(expand: F) -> impl FnOnce(I) -> Collect<I::Reducible, F>
where
    I: IntoReducible,
    F: Fn(I::Item) -> N,
    N: IntoReducible,
{
    move |source| crate::transformers::collect(source, expand)
}

/// Terminal stage form of [`reduce`](crate::reduce()).
pub fn reduce<I, S, F>(function: F, seed: S) -> impl FnOnce(I) -> S
where
    I: IntoReducible,
    F: FnMut(S, I::Item) -> S,
{
    move |source| crate::reduce::reduce(source, function, seed)
}

/// Terminal stage form of [`fold`](crate::fold::fold()).
///
/// The stage owns `combine` until it runs.
///
/// ```rust
/// use reducers::compose::stages::{fold, map};
/// use reducers::fold::combiner;
/// use reducers::pipe;
///
/// let data: Vec<u64> = (1..=10).collect();
/// let squares = pipe!(
///     &data,
///     map(|value: &u64| value * value),
///     fold(|total: u64, value: u64| total + value, combiner(|| 0, |a, b| a + b)),
/// );
/// assert_eq!(squares, 385);
/// ```
pub fn fold<I, S, R, C>(reducer: R, combine: C) -> impl FnOnce(I) -> S
where
    I: IntoReducible,
    I::Reducible: Foldable,
    S: Send,
    R: Fn(S, I::Item) -> S + Sync,
    C: Combine<S> + Sync,
{
    move |source| crate::fold::fold(source, reducer, &combine)
}

/// Terminal stage form of [`into`](crate::into()).
pub fn into<I, K>(sink: K) -> impl FnOnce(I) -> K
where
    I: IntoReducible,
    K: Extend<I::Item>,
{
    move |source| crate::sink::into(source, sink)
}

/// Terminal stage form of
/// [`reduce_monoid`](crate::typeclass::reduce_monoid()).
///
/// The monoid is the element type of the source.
///
/// ```rust
/// use reducers::compose::stages::{map, reduce_monoid};
/// use reducers::pipe;
/// use reducers::typeclass::Product;
///
/// let factors = [2, 3, 7];
/// let product = pipe!(&factors, map(|value: &i32| Product::new(*value)), reduce_monoid());
/// assert_eq!(product, Product::new(42));
/// ```
#[cfg(feature = "typeclass")]
pub fn reduce_monoid<I, M>() -> impl FnOnce(I) -> M
where
    M: crate::typeclass::Monoid,
    I: IntoReducible<Item = M>,
{
    crate::typeclass::reduce_monoid
}

/// Terminal stage form of [`fold_monoid`](crate::typeclass::fold_monoid()).
#[cfg(feature = "typeclass")]
pub fn fold_monoid<I, M>() -> impl FnOnce(I) -> M
where
    M: crate::typeclass::Monoid + Send,
    I: IntoReducible<Item = M>,
    I::Reducible: Foldable,
{
    crate::typeclass::fold_monoid
}
