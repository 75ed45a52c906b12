//! Transformers: reducibles that wrap another reducible and rewrite the
//! reducing function on its way down.
//!
//! | Transformer | Per element `v`                                    |
//! |-------------|----------------------------------------------------|
//! | [`Map`]     | `reducer(seed, f(v))`                              |
//! | [`Filter`]  | `reducer(seed, v)` if `predicate(&v)`, else `seed` |
//! | [`Collect`] | drain `expand(v)` into `reducer`, starting at `seed` |
//!
//! Nothing is buffered. Each transformer visits its source exactly once per
//! reduction, interleaving its work with the source traversal. All of them
//! also implement [`Foldable`](crate::fold::Foldable) when their source does.
//!
//! # Examples
//!
//! ```rust
//! use reducers::{collect, filter, map, reduce};
//!
//! let data = [1, 2, 3, 4, 5, 6];
//! assert_eq!(reduce(filter(&data, |value| **value % 2 == 0), |seed, value| seed + value, 0), 12);
//! assert_eq!(reduce(map(&data, |value| value * 2), |seed, value| seed + value, 0), 42);
//!
//! let nested = vec![vec![1, 2, 3], vec![4, 5, 6]];
//! assert_eq!(reduce(collect(&nested, |inner| inner), |seed, value| seed + value, 0), 21);
//! ```

mod collect;
mod filter;
mod map;

pub use collect::{Collect, collect};
pub use filter::{Filter, filter};
pub use map::{Map, map};
