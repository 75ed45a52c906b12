//! Arithmetic progressions as reducibles.

use thiserror::Error;

use crate::fold::{Combine, Executor, Foldable};
use crate::reducible::Reducible;

/// Errors raised when building a [`Sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The step does not move the first element towards the end, so the
    /// sequence would never terminate.
    #[error("sequence step does not advance from the start value")]
    NonAdvancingStep,
}

/// A value that a [`Sequence`] can advance by a step of type `O`.
///
/// Implemented for every primitive integer and float, stepped by its own
/// type.
pub trait Step<O>: PartialOrd + Sized {
    /// Returns `self + step`, or `None` when the sum is not representable.
    fn forward(&self, step: &O) -> Option<Self>;
}

macro_rules! checked_step {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Step<$numeric> for $numeric {
                #[inline]
                fn forward(&self, step: &$numeric) -> Option<Self> {
                    self.checked_add(*step)
                }
            }
        )*
    };
}

checked_step!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_step {
    ($($float:ty),* $(,)?) => {
        $(
            impl Step<$float> for $float {
                #[inline]
                fn forward(&self, step: &$float) -> Option<Self> {
                    Some(self + step)
                }
            }
        )*
    };
}

float_step!(f32, f64);

/// The progression `start, start + step, start + 2 * step, ...`, stopping
/// before the first value that is not less than `end`.
///
/// Elements are generated on demand; nothing is materialized. The sequence
/// also ends after the last value whose successor cannot be represented or
/// does not advance, such as an integer at its maximum or a float too large
/// for `step` to change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence<T, O> {
    start: T,
    end: T,
    step: O,
}

impl<T, O> Sequence<T, O> {
    /// Returns the first element (if the sequence is non-empty).
    pub const fn start(&self) -> &T {
        &self.start
    }

    /// Returns the exclusive upper bound.
    pub const fn end(&self) -> &T {
        &self.end
    }

    /// Returns the step between consecutive elements.
    pub const fn step(&self) -> &O {
        &self.step
    }
}

/// Creates the sequence from `start` (inclusive) to `end` (exclusive) by
/// `step`.
///
/// A sequence with `start >= end` is empty and always valid. So is one whose
/// first step overflows: it holds `start` alone.
///
/// # Errors
///
/// Returns [`SequenceError::NonAdvancingStep`] when the sequence is non-empty
/// and `start + step` is not greater than `start`.
///
/// # Examples
///
/// ```rust
/// use reducers::{Reducible, sources::{SequenceError, sequence}};
///
/// let evens = sequence(0, 10, 2).unwrap();
/// assert_eq!(evens.reduce(|seed, value| seed + value, 0), 20);
///
/// assert_eq!(sequence(0, 10, 0), Err(SequenceError::NonAdvancingStep));
/// // start >= end: empty, whatever the step
/// let empty = sequence(10, 0, -1).unwrap();
/// assert_eq!(empty.reduce(|seed, _| seed + 1, 0), 0);
/// ```
pub fn sequence<T, O>(start: T, end: T, step: O) -> Result<Sequence<T, O>, SequenceError>
where
    T: Step<O>,
{
    if start < end {
        let advances = start.forward(&step).is_none_or(|next| next > start);
        if !advances {
            return Err(SequenceError::NonAdvancingStep);
        }
    }
    Ok(Sequence { start, end, step })
}

impl<T, O> Reducible for Sequence<T, O>
where
    T: Step<O>,
{
    type Item = T;

    fn reduce<S, F>(self, mut function: F, seed: S) -> S
    where
        F: FnMut(S, Self::Item) -> S,
    {
        let Self { start, end, step } = self;
        let mut accumulator = seed;
        let mut current = start;
        while current < end {
            let next = current.forward(&step).filter(|next| *next > current);
            accumulator = function(accumulator, current);
            match next {
                Some(next) => current = next,
                None => break,
            }
        }
        accumulator
    }
}

impl<T, O> Foldable for Sequence<T, O>
where
    T: Step<O>,
{
    fn fold_with<S, R, C, E>(self, reducer: R, combine: &C, _executor: &E) -> S
    where
        S: Send,
        R: Fn(S, Self::Item) -> S + Sync,
        C: Combine<S> + Sync,
        E: Executor,
    {
        tracing::debug!("folding sequence sequentially");
        self.reduce(reducer, combine.identity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn elements<T: Step<O>, O>(sequence: Sequence<T, O>) -> Vec<T> {
        sequence.reduce(
            |mut seed: Vec<T>, value| {
                seed.push(value);
                seed
            },
            Vec::new(),
        )
    }

    #[rstest]
    #[case(1, 10, 2, vec![1, 3, 5, 7, 9])]
    #[case(0, 3, 1, vec![0, 1, 2])]
    #[case(0, 1, 5, vec![0])]
    #[case(5, 5, 1, vec![])]
    #[case(9, 3, 1, vec![])]
    fn generates_values_below_end(
        #[case] start: i32,
        #[case] end: i32,
        #[case] step: i32,
        #[case] expected: Vec<i32>,
    ) {
        assert_eq!(elements(sequence(start, end, step).unwrap()), expected);
    }

    #[rstest]
    fn odd_numbers_below_ten_sum_to_twenty_five() {
        let odds = sequence(1, 10, 2).unwrap();
        assert_eq!(odds.reduce(|seed, value| seed + value, 0), 25);
    }

    #[rstest]
    fn floating_point_progression() {
        let values = elements(sequence(0.0_f64, 1.0, 0.25).unwrap());
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[rstest]
    #[case(250, 255, 10, vec![250])]
    #[case(250, 255, 2, vec![250, 252, 254])]
    #[case(0, 255, 200, vec![0, 200])]
    #[case(254, 255, 1, vec![254])]
    fn stops_before_integer_overflow(
        #[case] start: u8,
        #[case] end: u8,
        #[case] step: u8,
        #[case] expected: Vec<u8>,
    ) {
        assert_eq!(elements(sequence(start, end, step).unwrap()), expected);
    }

    #[rstest]
    fn reaches_the_top_of_the_integer_range() {
        let near_max = sequence(i32::MAX - 5, i32::MAX, 2).unwrap();
        assert_eq!(elements(near_max), vec![i32::MAX - 5, i32::MAX - 3, i32::MAX - 1]);
    }

    #[rstest]
    fn float_sequence_ends_when_step_stops_advancing() {
        let limit = 2.0_f64.powi(53);
        let stalled = sequence(limit - 2.0, 1e17, 1.0).unwrap();
        assert_eq!(elements(stalled), vec![limit - 2.0, limit - 1.0, limit]);
    }

    #[rstest]
    #[case(0, 10, 0)]
    #[case(0, 10, -3)]
    fn non_advancing_step_is_rejected(#[case] start: i32, #[case] end: i32, #[case] step: i32) {
        assert_eq!(sequence(start, end, step), Err(SequenceError::NonAdvancingStep));
    }

    #[rstest]
    fn nan_step_is_rejected() {
        assert_eq!(sequence(0.0_f64, 1.0, f64::NAN), Err(SequenceError::NonAdvancingStep));
    }

    #[rstest]
    fn empty_sequence_accepts_any_step() {
        let empty = sequence(3, 3, 0).unwrap();
        assert_eq!(empty.reduce(|seed, value| seed + value, 11), 11);
    }

    #[rstest]
    fn error_message_is_descriptive() {
        assert_eq!(
            SequenceError::NonAdvancingStep.to_string(),
            "sequence step does not advance from the start value"
        );
    }
}
