//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is a semigroup with an identity element. It carries everything a
//! reduce or a fold needs: the identity is the seed of every leaf, and
//! `combine` both accumulates elements and merges partial results.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! ## Associativity (inherited from Semigroup)
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Max, Min, Product, Sum};

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use reducers::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum::<i32>::empty(), Sum::new(0));
/// assert_eq!(Sum::empty().combine(Sum::new(5)), Sum::new(5));
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

// =============================================================================
// Numeric Wrappers
// =============================================================================

/// The additive identity is the numeric default, zero.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! product_identity {
    ($one:expr => $($numeric:ty),* $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

product_identity!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
product_identity!(1.0 => f32, f64);

impl<A: PartialOrd + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: PartialOrd + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn assert_identity_laws<M>(value: M)
    where
        M: Monoid + PartialEq + Clone + std::fmt::Debug,
    {
        assert_eq!(M::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(M::empty()), value);
    }

    #[rstest]
    fn identity_laws_hold_for_instances() {
        assert_identity_laws(String::from("hello"));
        assert_identity_laws(vec![1, 2, 3]);
        assert_identity_laws(Some(Sum::new(4)));
        assert_identity_laws(Sum::new(-7_i64));
        assert_identity_laws(Product::new(9_u16));
        assert_identity_laws(Product::new(0.5_f64));
        assert_identity_laws(Max::new(i32::MIN));
        assert_identity_laws(Min::new('q'));
        assert_identity_laws((Sum::new(1), String::from("x")));
        assert_identity_laws((Sum::new(1_u8), Max::new(2_u8), Min::new(3_u8)));
    }

    #[rstest]
    fn bounded_identities_are_the_extremes() {
        assert_eq!(Max::<u32>::empty(), Max::new(0));
        assert_eq!(Min::<i8>::empty(), Min::new(i8::MAX));
    }
}
