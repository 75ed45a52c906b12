//! # reducers
//!
//! Composable, lazy reducers: collection pipelines that never build
//! intermediate collections.
//!
//! ## Overview
//!
//! A [`Reducible`] is anything that can be driven through a reducing
//! function `(seed, element) -> seed`. Transformers such as [`map`],
//! [`filter`] and [`collect`] wrap a reducible and rewrite the reducing
//! function on its way to the source; nothing runs until a terminal
//! operation pulls the pipeline:
//!
//! - **Reduce**: [`reduce`] threads one accumulator through every element in
//!   order
//! - **Fold**: [`fold()`] splits random-access sources into subranges, reduces
//!   each from an identity and merges the partial seeds with an associative
//!   [`Combine`], optionally in parallel
//! - **Sink**: [`into`] pushes every element into any [`Extend`] collection
//! - **Monoids**: the [`typeclass`] module derives seed, reducing function and
//!   combine from the element type
//! - **Composition**: [`pipe!`] with curried [`compose::stages`], or method
//!   chaining with [`ReducibleExt`]
//!
//! ## Feature Flags
//!
//! - `typeclass`: Semigroup and Monoid, with monoid-driven reduce and fold
//! - `compose`: the `pipe!` macro and curried pipeline stages
//! - `derive`: `#[derive(Semigroup, Monoid)]` for structs
//! - `rayon`: a work-stealing [`Executor`](fold::Executor) for parallel folds
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use reducers::prelude::*;
//!
//! let data = [1, 2, 3, 4, 5, 6];
//! let evens = filter(&data, |value| **value % 2 == 0);
//! assert_eq!(reduce(evens, |total, value| total + value, 0), 12);
//! let doubled = map(&data, |value| value * 2);
//! assert_eq!(reduce(doubled, |total, value| total + value, 0), 42);
//!
//! let nested = vec![vec![1, 2, 3], vec![4, 5, 6]];
//! assert_eq!(reduce(collect(&nested, |inner| inner), |total, value| total + value, 0), 21);
//!
//! let odds = sequence(1, 10, 2)?;
//! assert_eq!(reduce(odds, |total, value| total + value, 0), 25);
//! # Ok::<(), reducers::sources::SequenceError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the protocol traits, every source constructor, transformer and
/// terminal operation, and the items of the enabled features.
///
/// # Usage
///
/// ```rust
/// use reducers::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ext::ReducibleExt;
    pub use crate::fold::{Combine, Foldable, combiner, fold, fold_with};
    pub use crate::reduce::reduce;
    pub use crate::reducible::{IntoReducible, Reducible};
    pub use crate::sink::into;
    pub use crate::sources::{from_iterator, from_slice, sequence};
    pub use crate::transformers::{collect, filter, map};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::{flip, identity};
    #[cfg(feature = "compose")]
    pub use crate::pipe;
}

mod ext;
pub mod fold;
mod reduce;
mod reducible;
mod sink;
pub mod sources;
pub mod transformers;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

pub use ext::ReducibleExt;
pub use fold::{Combine, Foldable, fold};
pub use reduce::reduce;
pub use reducible::{IntoReducible, Reducible};
pub use sink::into;
pub use transformers::{collect, filter, map};
