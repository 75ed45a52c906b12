//! The collect (flat-map) transformer.

use crate::fold::{Combine, Executor, Foldable};
use crate::reducible::{IntoReducible, Reducible};

/// A reducible that expands every element of its source into a nested
/// reducible and flattens the result.
///
/// For each source element `v`, `expand(v)` is drained completely into the
/// downstream reducing function, starting from the seed accumulated so far,
/// before the next source element is visited. The effect is the same as
/// reducing the concatenation of all expansions once. This is the monadic
/// bind of reducibles.
///
/// When folding, the source may be split, but each expansion is still
/// drained sequentially within its leaf.
#[derive(Debug, Clone)]
pub struct Collect<R, F> {
    source: R,
    expand: F,
}

impl<R, F> Collect<R, F> {
    /// Wraps `source`, expanding each element with `expand`.
    pub const fn new(source: R, expand: F) -> Self {
        Self { source, expand }
    }
}

/// Creates a [`Collect`] over anything reducible.
///
/// `expand` may return anything that converts into a reducible: a borrowed
/// container, a range, a [`Sequence`](crate::sources::Sequence), or another
/// pipeline.
///
/// # Examples
///
/// ```rust
/// use reducers::{collect, reduce, sources::sequence};
///
/// // 0, 0, 1, 0, 1, 2
/// let triangle = collect(1..4, |length: i32| sequence(0, length, 1).unwrap());
/// assert_eq!(reduce(triangle, |seed, value| seed + value, 0), 4);
/// ```
pub fn collect<I, F, N>(source: I, expand: F) -> Collect<I::Reducible, F>
where
    I: IntoReducible,
    F: Fn(I::Item) -> N,
    N: IntoReducible,
{
    Collect::new(source.into_reducible(), expand)
}

impl<R, F, N> Reducible for Collect<R, F>
where
    R: Reducible,
    F: FnMut(R::Item) -> N,
    N: IntoReducible,
{
    type Item = N::Item;

    fn reduce<S, G>(self, mut function: G, seed: S) -> S
    where
        G: FnMut(S, Self::Item) -> S,
    {
        let Self { source, mut expand } = self;
        source.reduce(
            move |accumulator, value| {
                expand(value)
                    .into_reducible()
                    .reduce(&mut function, accumulator)
            },
            seed,
        )
    }
}

impl<R, F, N> Foldable for Collect<R, F>
where
    R: Foldable,
    F: Fn(R::Item) -> N + Sync,
    N: IntoReducible,
{
    fn fold_with<S, G, C, E>(self, reducer: G, combine: &C, executor: &E) -> S
    where
        S: Send,
        G: Fn(S, Self::Item) -> S + Sync,
        C: Combine<S> + Sync,
        E: Executor,
    {
        let Self { source, expand } = self;
        source.fold_with(
            move |accumulator, value| {
                expand(value)
                    .into_reducible()
                    .reduce(&reducer, accumulator)
            },
            combine,
            executor,
        )
    }
}
