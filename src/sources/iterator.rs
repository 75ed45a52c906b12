//! Reducible adapter for iterators.

use crate::fold::{Combine, Executor, Foldable};
use crate::reducible::Reducible;

/// A reducible backed by an [`Iterator`].
///
/// An iterator already carries both ends of the range it walks, so this is
/// the begin/end pair adapter. It is not splittable: folding reduces it
/// sequentially from the combine identity.
///
/// # Examples
///
/// ```rust
/// use reducers::{Reducible, sources::from_iterator};
///
/// let data = vec![1, 2, 3, 4];
/// let tail = from_iterator(data.iter().skip(1));
/// assert_eq!(tail.reduce(|seed, value| seed + value, 0), 9);
/// ```
#[derive(Debug, Clone)]
pub struct IteratorReducible<I> {
    iterator: I,
}

impl<I: Iterator> IteratorReducible<I> {
    /// Wraps `iterator`.
    #[inline]
    pub const fn new(iterator: I) -> Self {
        Self { iterator }
    }

    /// Returns the wrapped iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.iterator
    }
}

/// Creates an [`IteratorReducible`] from anything iterable.
#[inline]
pub fn from_iterator<I: IntoIterator>(iterable: I) -> IteratorReducible<I::IntoIter> {
    IteratorReducible::new(iterable.into_iter())
}

impl<I: Iterator> Reducible for IteratorReducible<I> {
    type Item = I::Item;

    fn reduce<S, F>(self, function: F, seed: S) -> S
    where
        F: FnMut(S, Self::Item) -> S,
    {
        self.iterator.fold(seed, function)
    }
}

impl<I: Iterator> Foldable for IteratorReducible<I> {
    fn fold_with<S, R, C, E>(self, reducer: R, combine: &C, _executor: &E) -> S
    where
        S: Send,
        R: Fn(S, Self::Item) -> S + Sync,
        C: Combine<S> + Sync,
        E: Executor,
    {
        tracing::debug!("folding iterator sequentially");
        self.reduce(reducer, combine.identity())
    }
}
