//! Executors for the fold path.
//!
//! An [`Executor`] is the "two-way split" capability a splittable source
//! needs: run two independent closures and hand back both results. It does
//! not know anything about ranges or reducing functions.

use super::config::FoldConfig;

/// Runs two independent computations and joins their results.
///
/// Implementations may run `left` and `right` concurrently. They must return
/// only after both have completed, and must not change which result is
/// reported on which side.
pub trait Executor: Sync {
    /// Runs `left` and `right`, returning `(left(), right())`.
    fn join<A, B, RA, RB>(&self, left: A, right: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send;

    /// Returns the split configuration used with this executor.
    fn config(&self) -> &FoldConfig;
}

/// Runs both halves on the calling thread, left first.
///
/// This is the in-process fallback: the range is still split and merged
/// exactly as a parallel executor would, so results are identical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sequential {
    config: FoldConfig,
}

impl Sequential {
    /// Creates a sequential executor with [`FoldConfig::default`].
    pub const fn new() -> Self {
        Self {
            config: FoldConfig::new(),
        }
    }

    /// Creates a sequential executor with the given configuration.
    pub const fn with_config(config: FoldConfig) -> Self {
        Self { config }
    }
}

impl Executor for Sequential {
    #[inline]
    fn join<A, B, RA, RB>(&self, left: A, right: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        let left_result = left();
        let right_result = right();
        (left_result, right_result)
    }

    fn config(&self) -> &FoldConfig {
        &self.config
    }
}

/// Runs the halves on the rayon thread pool with [`rayon::join`].
///
/// A panic in either half is propagated to the caller once both halves have
/// stopped.
#[cfg(feature = "rayon")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RayonExecutor {
    config: FoldConfig,
}

#[cfg(feature = "rayon")]
impl RayonExecutor {
    /// Creates a rayon executor with [`FoldConfig::default`].
    pub const fn new() -> Self {
        Self {
            config: FoldConfig::new(),
        }
    }

    /// Creates a rayon executor with the given configuration.
    pub const fn with_config(config: FoldConfig) -> Self {
        Self { config }
    }
}

#[cfg(feature = "rayon")]
impl Executor for RayonExecutor {
    #[inline]
    fn join<A, B, RA, RB>(&self, left: A, right: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        rayon::join(left, right)
    }

    fn config(&self) -> &FoldConfig {
        &self.config
    }
}

/// The executor used by [`fold`](super::fold): [`RayonExecutor`] when the
/// `rayon` feature is enabled, [`Sequential`] otherwise.
#[cfg(feature = "rayon")]
pub type DefaultExecutor = RayonExecutor;

/// The executor used by [`fold`](super::fold): [`RayonExecutor`] when the
/// `rayon` feature is enabled, [`Sequential`] otherwise.
#[cfg(not(feature = "rayon"))]
pub type DefaultExecutor = Sequential;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Mutex;

    #[rstest]
    fn sequential_runs_left_before_right() {
        let order = Mutex::new(Vec::new());
        let executor = Sequential::new();
        let (left, right) = executor.join(
            || {
                order.lock().unwrap().push("left");
                1
            },
            || {
                order.lock().unwrap().push("right");
                "two"
            },
        );
        assert_eq!((left, right), (1, "two"));
        assert_eq!(*order.lock().unwrap(), vec!["left", "right"]);
    }

    #[rstest]
    fn sequential_carries_its_config() {
        let config = FoldConfig::with_grain(8).unwrap();
        assert_eq!(*Sequential::with_config(config).config(), config);
    }

    #[cfg(feature = "rayon")]
    #[rstest]
    fn rayon_join_keeps_sides() {
        let executor = RayonExecutor::new();
        let (left, right) = executor.join(|| (0..100).sum::<i32>(), || "right");
        assert_eq!(left, 4950);
        assert_eq!(right, "right");
    }
}
