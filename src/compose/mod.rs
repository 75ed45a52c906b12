//! Pipeline composition.
//!
//! The free functions of this crate nest inside out:
//! `reduce(map(filter(source, p), f), g, seed)`. This module offers the
//! same pipelines in data-flow order.
//!
//! - [`pipe!`](crate::pipe!): applies stages to a value from left to right
//! - [`stages`]: curried forms of `map`, `filter`, `collect`, `reduce`,
//!   `fold`, `into` and the monoid-driven terminals
//! - [`identity`], [`flip`]: small combinators for pipeline arguments
//!
//! Method chaining through [`ReducibleExt`](crate::ReducibleExt) is the
//! other form; both build the same transformer values.
//!
//! # Examples
//!
//! ```
//! use reducers::compose::stages::{filter, reduce};
//! use reducers::pipe;
//!
//! let data = [1, 2, 3, 4, 5, 6];
//! let even_total = pipe!(
//!     &data,
//!     filter(|value: &&i32| **value % 2 == 0),
//!     reduce(|total: i32, value: &i32| total + value, 0),
//! );
//! assert_eq!(even_total, 12);
//! ```

mod pipe_macro;
pub mod stages;
mod utils;

pub use utils::{flip, identity};
