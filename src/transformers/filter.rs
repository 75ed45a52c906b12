//! The filter transformer.

use crate::fold::{Combine, Executor, Foldable};
use crate::reducible::{IntoReducible, Reducible};

/// A reducible that only passes on the elements accepted by a predicate.
///
/// Rejected elements leave the seed untouched. Every source element is
/// still visited: filtering never ends a traversal early.
#[derive(Debug, Clone)]
pub struct Filter<R, P> {
    source: R,
    predicate: P,
}

impl<R, P> Filter<R, P> {
    /// Wraps `source`, keeping the elements for which `predicate` holds.
    pub const fn new(source: R, predicate: P) -> Self {
        Self { source, predicate }
    }
}

/// Creates a [`Filter`] over anything reducible.
///
/// # Examples
///
/// ```rust
/// use reducers::{filter, reduce};
///
/// let odd = filter(1..=9, |value: &i32| value % 2 == 1);
/// assert_eq!(reduce(odd, |seed, value| seed + value, 0), 25);
/// ```
pub fn filter<I, P>(source: I, predicate: P) -> Filter<I::Reducible, P>
where
    I: IntoReducible,
    P: Fn(&I::Item) -> bool,
{
    Filter::new(source.into_reducible(), predicate)
}

impl<R, P> Reducible for Filter<R, P>
where
    R: Reducible,
    P: FnMut(&R::Item) -> bool,
{
    type Item = R::Item;

    fn reduce<S, F>(self, mut function: F, seed: S) -> S
    where
        F: FnMut(S, Self::Item) -> S,
    {
        let Self {
            source,
            mut predicate,
        } = self;
        source.reduce(
            move |accumulator, value| {
                if predicate(&value) {
                    function(accumulator, value)
                } else {
                    accumulator
                }
            },
            seed,
        )
    }
}

impl<R, P> Foldable for Filter<R, P>
where
    R: Foldable,
    P: Fn(&R::Item) -> bool + Sync,
{
    fn fold_with<S, F, C, E>(self, reducer: F, combine: &C, executor: &E) -> S
    where
        S: Send,
        F: Fn(S, Self::Item) -> S + Sync,
        C: Combine<S> + Sync,
        E: Executor,
    {
        let Self { source, predicate } = self;
        source.fold_with(
            move |accumulator, value| {
                if predicate(&value) {
                    reducer(accumulator, value)
                } else {
                    accumulator
                }
            },
            combine,
            executor,
        )
    }
}
