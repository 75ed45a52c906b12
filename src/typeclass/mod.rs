//! Algebraic structure for reductions.
//!
//! A [`Monoid`] packages everything a reduction needs in the element type
//! itself: an identity seed and an associative operation that both
//! accumulates elements and merges partial fold results.
//!
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//! - [`Sum`], [`Product`]: Numeric wrappers for different monoid operations
//! - [`Max`], [`Min`]: Bounded numeric wrappers
//! - [`Bounded`]: Trait for types with minimum and maximum values
//! - [`reduce_monoid`], [`fold_monoid`]: reduce and fold driven by the monoid
//!   of the element type
//!
//! With the `derive` feature, `#[derive(Semigroup, Monoid)]` implements both
//! traits field by field for structs whose fields are all monoids.
//!
//! # Examples
//!
//! ```rust
//! use reducers::map;
//! use reducers::typeclass::{Max, Sum, fold_monoid};
//!
//! let latencies = vec![12, 40, 7, 19];
//! let (total, worst): (Sum<u32>, Max<u32>) =
//!     fold_monoid(map(&latencies, |latency| (Sum::new(*latency), Max::new(*latency))));
//! assert_eq!(total.into_inner(), 78);
//! assert_eq!(worst.into_inner(), 40);
//! ```

mod monoid;
mod monoid_fold;
mod semigroup;
mod wrappers;

pub use monoid::Monoid;
pub use monoid_fold::{MonoidCombine, fold_monoid, fold_monoid_with, reduce_monoid};
pub use semigroup::Semigroup;
pub use wrappers::{Bounded, Max, Min, Product, Sum};

#[cfg(feature = "derive")]
pub use reducers_derive::{Monoid, Semigroup};
