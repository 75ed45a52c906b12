//! Derive macros for reducers monoids.
//!
//! This crate provides procedural macros that implement the `Semigroup` and
//! `Monoid` traits of `reducers::typeclass` for structs, field by field. A
//! struct whose fields are all monoids is then a monoid itself, and can be
//! used as the element type of a monoid-driven reduce or fold to compute
//! several aggregates in one pass.
//!
//! # Available Derive Macros
//!
//! - [`Semigroup`]: combines two values field by field
//! - [`Monoid`]: the identity of every field
//!
//! # Example
//!
//! ```rust,ignore
//! use reducers::map;
//! use reducers::typeclass::{Max, Monoid, Semigroup, Sum, fold_monoid};
//!
//! #[derive(Debug, PartialEq, Semigroup, Monoid)]
//! struct Stats {
//!     total: Sum<u64>,
//!     peak: Max<u64>,
//! }
//!
//! let samples = [3, 9, 4];
//! let stats: Stats = fold_monoid(map(&samples, |sample| Stats {
//!     total: Sum::new(*sample),
//!     peak: Max::new(*sample),
//! }));
//! assert_eq!(stats, Stats { total: Sum::new(16), peak: Max::new(9) });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod fields;
mod monoid;
mod semigroup;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro implementing `reducers::typeclass::Semigroup` for a struct.
///
/// `combine` combines each field with the same field of the other value.
/// Named, tuple and unit structs are supported. Every field type must
/// implement `Semigroup`; for generic structs the bound is placed on the
/// field types.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl Semigroup for Stats {
///     fn combine(self, other: Self) -> Self {
///         Self {
///             total: Semigroup::combine(self.total, other.total),
///             peak: Semigroup::combine(self.peak, other.peak),
///         }
///     }
/// }
/// ```
#[proc_macro_derive(Semigroup)]
pub fn derive_semigroup(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(
        semigroup::derive_semigroup_impl(&input).unwrap_or_else(|error| error.to_compile_error()),
    )
}

/// Derive macro implementing `reducers::typeclass::Monoid` for a struct.
///
/// `empty` builds the struct from the identity of every field. The struct
/// must also implement `Semigroup`, usually through
/// [`derive(Semigroup)`](macro@Semigroup).
///
/// # Generated Code
///
/// ```rust,ignore
/// impl Monoid for Stats {
///     fn empty() -> Self {
///         Self {
///             total: Monoid::empty(),
///             peak: Monoid::empty(),
///         }
///     }
/// }
/// ```
#[proc_macro_derive(Monoid)]
pub fn derive_monoid(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(
        monoid::derive_monoid_impl(&input).unwrap_or_else(|error| error.to_compile_error()),
    )
}
