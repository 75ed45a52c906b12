//! The `pipe!` macro for left-to-right pipeline composition.
//!
//! This module provides the [`pipe!`] macro which applies stages from left
//! to right, so that a pipeline reads in the order its data flows.

/// Pipes a value through a series of stages from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// Combined with the curried [`stages`](crate::compose::stages), this is the
/// pipeline form of the free functions: a source enters on the left, each
/// transformer stage wraps it, and a terminal stage (`reduce`, `fold`,
/// `into`) drains it.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g)` - Returns `g(f(x))`
/// - `pipe!(x, f, g, h, ...)` - Returns `...h(g(f(x)))`
///
/// # Type Requirements
///
/// Each stage only needs to implement [`FnOnce`], since each stage is called
/// exactly once. Every curried stage moves its captured function into the
/// transformer it builds.
///
/// # Examples
///
/// ## Reducer pipeline
///
/// ```
/// use reducers::compose::stages::{filter, map, reduce};
/// use reducers::pipe;
///
/// let data = vec![1, 2, 3, 4, 5, 6];
/// let total = pipe!(
///     &data,
///     filter(|value: &&i32| **value % 2 == 0),
///     map(|value: &i32| value * 3),
///     reduce(|total: i32, value: i32| total + value, 0),
/// );
/// assert_eq!(total, 36);
/// ```
///
/// ## Plain functions
///
/// ```
/// use reducers::pipe;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// assert_eq!(pipe!(3, square, add_one), 10);
/// ```
///
/// ## Same result as nested calls
///
/// ```
/// use reducers::compose::stages;
/// use reducers::{map, pipe, reduce};
///
/// let data = [1, 2, 3];
/// let nested = reduce(map(&data, |value| value * 10), |total, value| total + value, 0);
/// let piped = pipe!(
///     &data,
///     stages::map(|value: &i32| value * 10),
///     stages::reduce(|total: i32, value: i32| total + value, 0),
/// );
/// assert_eq!(nested, piped);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
