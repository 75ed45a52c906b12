//! The map transformer.

use crate::fold::{Combine, Executor, Foldable};
use crate::reducible::{IntoReducible, Reducible};

/// A reducible that applies a function to every element of its source.
///
/// Reducing `Map { source, function }` with `reducer` is reducing `source`
/// with `|seed, value| reducer(seed, function(value))`.
#[derive(Debug, Clone)]
pub struct Map<R, F> {
    source: R,
    function: F,
}

impl<R, F> Map<R, F> {
    /// Wraps `source`, transforming each element with `function`.
    pub const fn new(source: R, function: F) -> Self {
        Self { source, function }
    }
}

/// Creates a [`Map`] over anything reducible.
///
/// # Examples
///
/// ```rust
/// use reducers::{map, reduce};
///
/// let lengths = map(&["a", "bb", "ccc"], |word| word.len());
/// assert_eq!(reduce(lengths, |seed, value| seed + value, 0), 6);
/// ```
pub fn map<I, F, U>(source: I, function: F) -> Map<I::Reducible, F>
where
    I: IntoReducible,
    F: Fn(I::Item) -> U,
{
    Map::new(source.into_reducible(), function)
}

impl<R, F, U> Reducible for Map<R, F>
where
    R: Reducible,
    F: FnMut(R::Item) -> U,
{
    type Item = U;

    fn reduce<S, G>(self, mut function: G, seed: S) -> S
    where
        G: FnMut(S, Self::Item) -> S,
    {
        let Self {
            source,
            function: mut transform,
        } = self;
        source.reduce(
            move |accumulator, value| function(accumulator, transform(value)),
            seed,
        )
    }
}

impl<R, F, U> Foldable for Map<R, F>
where
    R: Foldable,
    F: Fn(R::Item) -> U + Sync,
{
    fn fold_with<S, G, C, E>(self, reducer: G, combine: &C, executor: &E) -> S
    where
        S: Send,
        G: Fn(S, Self::Item) -> S + Sync,
        C: Combine<S> + Sync,
        E: Executor,
    {
        let Self {
            source,
            function: transform,
        } = self;
        source.fold_with(
            move |accumulator, value| reducer(accumulator, transform(value)),
            combine,
            executor,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fold::{FoldConfig, Sequential, combiner};
    use crate::sources::sequence;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn doubles_each_element() {
        let data = [1, 2, 3, 4, 5, 6];
        let doubled = map(&data, |value| value * 2);
        assert_eq!(doubled.reduce(|seed, value| seed + value, 0), 42);
    }

    #[rstest]
    fn changes_element_type() {
        let rendered = map(1..4, |value: i32| value.to_string())
            .reduce(|seed: String, value| seed + &value, String::new());
        assert_eq!(rendered, "123");
    }

    #[rstest]
    fn stateful_function_sees_elements_in_order() {
        let position = Cell::new(0);
        let indexed = map(&['a', 'b', 'c'], |value| {
            position.set(position.get() + 1);
            (position.get(), *value)
        })
        .reduce(
            |mut seed: Vec<(i32, char)>, value| {
                seed.push(value);
                seed
            },
            Vec::new(),
        );
        assert_eq!(indexed, vec![(1, 'a'), (2, 'b'), (3, 'c')]);
    }

    #[rstest]
    fn nested_maps_compose() {
        let composed = map(map(sequence(0, 5, 1).unwrap(), |value| value + 1), |value| value * 10);
        assert_eq!(composed.reduce(|seed, value| seed + value, 0), 150);
    }

    #[rstest]
    fn empty_source_returns_seed() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(map(&empty, |value| value * 2).reduce(|seed, value| seed + value, 9), 9);
    }

    #[rstest]
    fn fold_matches_reduce() {
        let data: Vec<i64> = (0..100).collect();
        let executor = Sequential::with_config(FoldConfig::with_grain(3).unwrap());
        let folded = map(&data, |value| value * value).fold_with(
            |seed: i64, value| seed + value,
            &combiner(|| 0, |left, right| left + right),
            &executor,
        );
        let reduced = map(&data, |value| value * value).reduce(|seed, value| seed + value, 0);
        assert_eq!(folded, reduced);
    }
}
