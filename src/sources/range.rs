//! Reducible view over a borrowed slice.

use crate::fold::{Combine, Executor, Foldable};
use crate::reducible::Reducible;

/// A non-owning reducible over a contiguous range of elements.
///
/// Items are handed out as `&'a T`. The underlying container must outlive
/// the pipeline, which the borrow checker enforces.
///
/// Because the range is random-access, [`Foldable::fold_with`] splits it at
/// the midpoint until subranges reach the executor's grain size, reduces the
/// leaves independently and merges the partial seeds left to right.
///
/// # Examples
///
/// ```rust
/// use reducers::{Reducible, sources::from_slice};
///
/// let data = [3, 1, 4, 1, 5];
/// let reducible = from_slice(&data);
/// assert_eq!(reducible.reduce(|seed, value| seed + value, 0), 14);
/// // Copy: the same range can be reduced again.
/// assert_eq!(reducible.reduce(|seed, _| seed + 1, 0), 5);
/// ```
#[derive(Debug)]
pub struct RangeReducible<'a, T> {
    slice: &'a [T],
}

impl<T> Clone for RangeReducible<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RangeReducible<'_, T> {}

impl<'a, T> RangeReducible<'a, T> {
    /// Creates a reducible over `slice`.
    #[inline]
    pub const fn new(slice: &'a [T]) -> Self {
        Self { slice }
    }

    /// Returns the number of elements in the range.
    #[inline]
    pub const fn len(&self) -> usize {
        self.slice.len()
    }

    /// Returns whether the range has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    /// Splits the range into two halves at the midpoint.
    ///
    /// The left half gets the smaller share when the length is odd.
    #[must_use]
    pub fn split(self) -> (Self, Self) {
        let (left, right) = self.slice.split_at(self.slice.len() / 2);
        (Self::new(left), Self::new(right))
    }

    /// Returns the underlying slice.
    #[inline]
    pub const fn as_slice(&self) -> &'a [T] {
        self.slice
    }
}

/// Creates a [`RangeReducible`] over `slice`.
#[inline]
pub const fn from_slice<T>(slice: &[T]) -> RangeReducible<'_, T> {
    RangeReducible::new(slice)
}

impl<'a, T> Reducible for RangeReducible<'a, T> {
    type Item = &'a T;

    fn reduce<S, F>(self, function: F, seed: S) -> S
    where
        F: FnMut(S, Self::Item) -> S,
    {
        self.slice.iter().fold(seed, function)
    }
}

impl<T: Sync> Foldable for RangeReducible<'_, T> {
    fn fold_with<S, R, C, E>(self, reducer: R, combine: &C, executor: &E) -> S
    where
        S: Send,
        R: Fn(S, Self::Item) -> S + Sync,
        C: Combine<S> + Sync,
        E: Executor,
    {
        let grain = executor.config().grain().resolve(self.len());
        tracing::debug!(length = self.len(), grain, "folding range");
        fold_range(self, &reducer, combine, executor, grain)
    }
}

fn fold_range<'a, T, S, R, C, E>(
    range: RangeReducible<'a, T>,
    reducer: &R,
    combine: &C,
    executor: &E,
    grain: usize,
) -> S
where
    T: Sync,
    S: Send,
    R: Fn(S, &'a T) -> S + Sync,
    C: Combine<S> + Sync,
    E: Executor,
{
    if range.len() <= grain {
        return range.reduce(reducer, combine.identity());
    }

    let (left, right) = range.split();
    tracing::trace!(left = left.len(), right = right.len(), "splitting range");
    let (left_seed, right_seed) = executor.join(
        || fold_range(left, reducer, combine, executor, grain),
        || fold_range(right, reducer, combine, executor, grain),
    );
    combine.combine(left_seed, right_seed)
}

static_assertions::assert_impl_all!(RangeReducible<'static, i32>: Copy, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fold::{FoldConfig, Sequential, combiner};
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, 0)]
    #[case(1, 0, 1)]
    #[case(5, 2, 3)]
    #[case(6, 3, 3)]
    fn split_halves_at_midpoint(
        #[case] length: usize,
        #[case] left_length: usize,
        #[case] right_length: usize,
    ) {
        let data: Vec<usize> = (0..length).collect();
        let (left, right) = from_slice(&data).split();
        assert_eq!(left.len(), left_length);
        assert_eq!(right.len(), right_length);
    }

    #[rstest]
    fn reduce_visits_elements_in_order() {
        let data = ["a", "b", "c"];
        let joined = from_slice(&data).reduce(|seed: String, value| seed + *value, String::new());
        assert_eq!(joined, "abc");
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(64)]
    fn fold_preserves_order_for_any_grain(#[case] grain: usize) {
        let data: Vec<u32> = (0..37).collect();
        let config = FoldConfig::with_grain(grain).unwrap();
        let executor = Sequential::with_config(config);
        let concatenate = combiner(Vec::new, |mut left: Vec<u32>, right: Vec<u32>| {
            left.extend(right);
            left
        });

        let folded = from_slice(&data).fold_with(
            |mut seed: Vec<u32>, value: &u32| {
                seed.push(*value);
                seed
            },
            &concatenate,
            &executor,
        );

        assert_eq!(folded, data);
    }

    #[rstest]
    fn fold_of_empty_range_is_identity() {
        let empty: [i64; 0] = [];
        let result = from_slice(&empty).fold_with(
            |seed: i64, value: &i64| seed + value,
            &combiner(|| 7_i64, |left, right| left + right),
            &Sequential::new(),
        );
        assert_eq!(result, 7);
    }
}
