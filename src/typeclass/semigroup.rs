//! Semigroup type class - types with an associative binary operation.
//!
//! A semigroup is the part of a fold that merges partial results: a type `T`
//! with a function `combine: (T, T) -> T` that is associative. Associativity
//! is what allows a fold to split its source anywhere and still produce the
//! same result.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use reducers::typeclass::{Max, Semigroup, Sum};
//!
//! assert_eq!(Sum::new(2).combine(Sum::new(3)), Sum::new(5));
//! assert_eq!(Max::new(2).combine(Max::new(3)), Max::new(3));
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Max, Min, Product, Sum};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// All implementations must satisfy:
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// Commutativity is not required: folds merge partial results in source
/// order.
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reducers::typeclass::Semigroup;
    ///
    /// let result = String::from("fold").combine(String::from("able"));
    /// assert_eq!(result, "foldable");
    /// ```
    #[must_use]
    fn combine(self, other: Self) -> Self;
}

// =============================================================================
// Collections
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` is absorbed: `Some(a).combine(None) == Some(a)`.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

// =============================================================================
// Numeric Wrappers
// =============================================================================

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

/// Keeps the larger value, preferring the left one on ties. Comparisons
/// involving NaN keep the left value, which breaks associativity.
impl<A: PartialOrd> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if other.0 > self.0 { other } else { self }
    }
}

/// Keeps the smaller value, preferring the left one on ties. Comparisons
/// involving NaN keep the left value, which breaks associativity.
impl<A: PartialOrd> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if other.0 < self.0 { other } else { self }
    }
}

// =============================================================================
// Tuples
// =============================================================================

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_combine_concatenates() {
        assert_eq!(String::from("Hello, ").combine(String::from("World!")), "Hello, World!");
    }

    #[rstest]
    fn vec_combine_keeps_order() {
        assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
    }

    #[rstest]
    #[case(Some(Sum::new(1)), Some(Sum::new(2)), Some(Sum::new(3)))]
    #[case(Some(Sum::new(1)), None, Some(Sum::new(1)))]
    #[case(None, Some(Sum::new(2)), Some(Sum::new(2)))]
    #[case(None, None, None)]
    fn option_combine(
        #[case] left: Option<Sum<i32>>,
        #[case] right: Option<Sum<i32>>,
        #[case] expected: Option<Sum<i32>>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn product_multiplies() {
        assert_eq!(Product::new(6).combine(Product::new(7)), Product::new(42));
    }

    #[rstest]
    fn max_and_min_work_for_floats() {
        assert_eq!(Max::new(1.5).combine(Max::new(-2.0)), Max::new(1.5));
        assert_eq!(Min::new(1.5).combine(Min::new(-2.0)), Min::new(-2.0));
    }

    #[rstest]
    fn tuples_combine_componentwise() {
        let left = (Sum::new(1), Max::new(5), String::from("a"));
        let right = (Sum::new(2), Max::new(3), String::from("b"));
        assert_eq!(
            left.combine(right),
            (Sum::new(3), Max::new(5), String::from("ab"))
        );
    }
}
