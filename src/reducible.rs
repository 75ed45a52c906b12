//! The reduction protocol.
//!
//! A [`Reducible`] is anything that can thread a seed through a reducing
//! function, visiting each of its elements exactly once and in order.
//! [`IntoReducible`] is the adaptation layer: it lets plain containers,
//! slices, arrays and ranges take part in a pipeline without the caller
//! wrapping them by hand.
//!
//! # Conventions
//!
//! Reducing functions always take the accumulated seed first and the element
//! second:
//!
//! ```text
//! function: (Seed, Item) -> Seed
//! ```
//!
//! # Examples
//!
//! ```rust
//! use reducers::{IntoReducible, Reducible};
//!
//! let data = vec![1, 2, 3, 4];
//! let total = (&data).into_reducible().reduce(|seed, value| seed + value, 0);
//! assert_eq!(total, 10);
//! ```

use std::ops::{Range, RangeInclusive};

use crate::sources::{IteratorReducible, RangeReducible};

/// A source that can fold a reducing function over its elements.
///
/// # Laws
///
/// For a finite reducible `r` with elements `e1, e2, ..., en`:
///
/// ```text
/// r.reduce(f, seed) == f(...f(f(seed, e1), e2)..., en)
/// ```
///
/// In particular an empty reducible returns `seed` unchanged.
///
/// Reducibles are consumed by value. Types that support repeated traversal
/// implement [`Clone`] (or [`Copy`]), so a pipeline can be cloned and reduced
/// again.
pub trait Reducible {
    /// The type of the elements handed to the reducing function.
    type Item;

    /// Reduces every element into `seed` with `function`, in source order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reducers::{Reducible, sources::from_iterator};
    ///
    /// let joined = from_iterator(["a", "b", "c"].into_iter())
    ///     .reduce(|mut seed: String, value| { seed.push_str(value); seed }, String::new());
    /// assert_eq!(joined, "abc");
    /// ```
    fn reduce<S, F>(self, function: F, seed: S) -> S
    where
        F: FnMut(S, Self::Item) -> S;
}

/// Conversion into a [`Reducible`].
///
/// Every [`Reducible`] converts into itself. Borrowed slices, vectors and
/// arrays become a non-owning [`RangeReducible`]; owned containers and
/// ranges become an [`IteratorReducible`].
///
/// A type without an implementation is rejected at compile time:
///
/// ```rust,compile_fail
/// use reducers::reduce;
///
/// struct Opaque;
/// let _ = reduce(Opaque, |seed: i32, _value: i32| seed, 0);
/// ```
pub trait IntoReducible {
    /// The element type of the resulting reducible.
    type Item;

    /// The reducible this value converts into.
    type Reducible: Reducible<Item = Self::Item>;

    /// Performs the conversion.
    fn into_reducible(self) -> Self::Reducible;
}

impl<R: Reducible> IntoReducible for R {
    type Item = R::Item;
    type Reducible = R;

    #[inline]
    fn into_reducible(self) -> Self::Reducible {
        self
    }
}

// =============================================================================
// Borrowed Containers
// =============================================================================

impl<'a, T> IntoReducible for &'a [T] {
    type Item = &'a T;
    type Reducible = RangeReducible<'a, T>;

    #[inline]
    fn into_reducible(self) -> Self::Reducible {
        RangeReducible::new(self)
    }
}

impl<'a, T> IntoReducible for &'a Vec<T> {
    type Item = &'a T;
    type Reducible = RangeReducible<'a, T>;

    #[inline]
    fn into_reducible(self) -> Self::Reducible {
        RangeReducible::new(self.as_slice())
    }
}

impl<'a, T, const N: usize> IntoReducible for &'a [T; N] {
    type Item = &'a T;
    type Reducible = RangeReducible<'a, T>;

    #[inline]
    fn into_reducible(self) -> Self::Reducible {
        RangeReducible::new(self.as_slice())
    }
}

// =============================================================================
// Owned Containers and Ranges
// =============================================================================

impl<T> IntoReducible for Vec<T> {
    type Item = T;
    type Reducible = IteratorReducible<std::vec::IntoIter<T>>;

    #[inline]
    fn into_reducible(self) -> Self::Reducible {
        IteratorReducible::new(self.into_iter())
    }
}

impl<T, const N: usize> IntoReducible for [T; N] {
    type Item = T;
    type Reducible = IteratorReducible<std::array::IntoIter<T, N>>;

    #[inline]
    fn into_reducible(self) -> Self::Reducible {
        IteratorReducible::new(self.into_iter())
    }
}

impl<T> IntoReducible for Option<T> {
    type Item = T;
    type Reducible = IteratorReducible<std::option::IntoIter<T>>;

    #[inline]
    fn into_reducible(self) -> Self::Reducible {
        IteratorReducible::new(self.into_iter())
    }
}

impl<T> IntoReducible for Range<T>
where
    Self: Iterator<Item = T>,
{
    type Item = T;
    type Reducible = IteratorReducible<Self>;

    #[inline]
    fn into_reducible(self) -> Self::Reducible {
        IteratorReducible::new(self)
    }
}

impl<T> IntoReducible for RangeInclusive<T>
where
    Self: Iterator<Item = T>,
{
    type Item = T;
    type Reducible = IteratorReducible<Self>;

    #[inline]
    fn into_reducible(self) -> Self::Reducible {
        IteratorReducible::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn borrowed_vec_reduces_in_order() {
        let data = vec![1, 2, 3];
        let visited = (&data).into_reducible().reduce(
            |mut seed: Vec<i32>, value| {
                seed.push(*value);
                seed
            },
            Vec::new(),
        );
        assert_eq!(visited, data);
    }

    #[rstest]
    fn array_by_value_yields_owned_items() {
        let words = [String::from("a"), String::from("b")];
        let joined = words
            .into_reducible()
            .reduce(|seed: String, value: String| seed + &value, String::new());
        assert_eq!(joined, "ab");
    }

    #[rstest]
    #[case(None, 10)]
    #[case(Some(5), 15)]
    fn option_is_zero_or_one_element(#[case] value: Option<i32>, #[case] expected: i32) {
        assert_eq!(value.into_reducible().reduce(|seed, item| seed + item, 10), expected);
    }

    #[rstest]
    fn ranges_are_reducible() {
        assert_eq!((1..5).into_reducible().reduce(|seed, item| seed + item, 0), 10);
        assert_eq!((1..=5).into_reducible().reduce(|seed, item| seed + item, 0), 15);
    }

    #[rstest]
    fn empty_slice_returns_seed() {
        let empty: &[i32] = &[];
        assert_eq!(empty.into_reducible().reduce(|seed, item| seed + item, 42), 42);
    }
}
