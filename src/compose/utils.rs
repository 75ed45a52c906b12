//! Small combinators for building pipeline arguments.
//!
//! - [`identity`]: the expansion that makes [`collect`](crate::collect()) a
//!   plain flatten
//! - [`flip`]: adapts a value-first binary function to the seed-first
//!   reducing convention

/// Returns the value unchanged.
///
/// As the expansion of `collect`, it flattens one level of nesting.
///
/// # Examples
///
/// ```
/// use reducers::compose::identity;
/// use reducers::{collect, reduce};
///
/// let nested = vec![vec![1, 2, 3], vec![4, 5, 6]];
/// let total = reduce(collect(&nested, identity), |total, value| total + value, 0);
/// assert_eq!(total, 21);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Swaps the arguments of a binary function.
///
/// Every reducing function in this crate receives the accumulated seed
/// first. `flip` lets an existing function written as `(value, seed)` be
/// used without a wrapping closure.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use reducers::compose::flip;
/// use reducers::reduce;
///
/// fn push_front(value: &char, mut word: String) -> String {
///     word.insert(0, *value);
///     word
/// }
///
/// let letters = ['a', 'b', 'c'];
/// assert_eq!(reduce(&letters, flip(push_front), String::new()), "cba");
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce;
    use crate::transformers::collect;
    use rstest::rstest;

    #[rstest]
    fn identity_flattens_owned_batches() {
        let batches = vec![vec![1, 2], vec![], vec![3]];
        let count = reduce(collect(batches, identity), |count: usize, _| count + 1, 0);
        assert_eq!(count, 3);
    }

    #[rstest]
    fn flip_swaps_arguments() {
        fn power(base: i32, exponent: u32) -> i32 {
            base.pow(exponent)
        }

        let flipped_power = flip(power);
        assert_eq!(flipped_power(3, 2), 8);
    }

    #[rstest]
    fn double_flip_is_identity() {
        let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
        assert_eq!(flip(flip(subtract))(10, 3), subtract(10, 3));
    }
}
