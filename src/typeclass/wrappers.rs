//! Numeric wrapper types for different algebraic operations.
//!
//! The same number can be aggregated in several ways. These newtypes pick
//! one, so that the element type of a pipeline determines which
//! [`Semigroup`](super::Semigroup)/[`Monoid`](super::Monoid) a monoid-driven
//! reduce or fold uses:
//!
//! - [`Sum`]: addition (identity: 0)
//! - [`Product`]: multiplication (identity: 1)
//! - [`Max`]: maximum (identity: [`Bounded::MIN_VALUE`])
//! - [`Min`]: minimum (identity: [`Bounded::MAX_VALUE`])
//!
//! # Examples
//!
//! ```rust
//! use reducers::{map, typeclass::{Max, reduce_monoid}};
//!
//! let data = [3, 9, 2];
//! let largest: Max<i32> = reduce_monoid(map(&data, |value| Max::new(*value)));
//! assert_eq!(largest.into_inner(), 9);
//! ```

macro_rules! numeric_wrapper {
    ($(#[$attribute:meta])* $name:ident) => {
        $(#[$attribute])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            #[doc = concat!("Wraps `value` in [`", stringify!($name), "`].")]
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Returns a reference to the inner value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $name<A> {
            fn from(value: A) -> Self {
                Self::new(value)
            }
        }
    };
}

numeric_wrapper! {
    /// Aggregates by addition.
    ///
    /// `Sum(a).combine(Sum(b)) == Sum(a + b)`, identity `Sum(0)`.
    Sum
}

numeric_wrapper! {
    /// Aggregates by multiplication.
    ///
    /// `Product(a).combine(Product(b)) == Product(a * b)`, identity `Product(1)`.
    Product
}

numeric_wrapper! {
    /// Aggregates by keeping the maximum.
    Max
}

numeric_wrapper! {
    /// Aggregates by keeping the minimum.
    Min
}

// =============================================================================
// Bounded Trait
// =============================================================================

/// Types with a smallest and a largest value.
///
/// These provide the identities of the [`Max`] and [`Min`] monoids.
pub trait Bounded {
    /// The smallest value of the type.
    const MIN_VALUE: Self;

    /// The largest value of the type.
    const MAX_VALUE: Self;
}

macro_rules! bounded_by_constants {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Bounded for $numeric {
                const MIN_VALUE: Self = Self::MIN;
                const MAX_VALUE: Self = Self::MAX;
            }
        )*
    };
}

bounded_by_constants!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

impl Bounded for f32 {
    const MIN_VALUE: Self = Self::NEG_INFINITY;
    const MAX_VALUE: Self = Self::INFINITY;
}

impl Bounded for f64 {
    const MIN_VALUE: Self = Self::NEG_INFINITY;
    const MAX_VALUE: Self = Self::INFINITY;
}

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}
