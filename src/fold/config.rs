//! Split granularity for parallel folds.

use std::num::NonZeroUsize;

use thiserror::Error;

/// Number of leaves per worker thread targeted by [`Grain::Auto`].
const LEAVES_PER_THREAD: usize = 4;

/// Errors raised when building a [`FoldConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A grain of zero would split forever.
    #[error("fold grain must be at least 1")]
    ZeroGrain,
}

/// How small a subrange must be before it is reduced sequentially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grain {
    /// Derive the grain from the source length and the number of CPUs, aiming
    /// for a few leaves per thread.
    #[default]
    Auto,
    /// Stop splitting once a subrange has at most this many elements.
    Fixed(NonZeroUsize),
}

impl Grain {
    /// Resolves the grain for a source of `length` elements. Never returns 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::num::NonZeroUsize;
    /// use reducers::fold::Grain;
    ///
    /// let fixed = Grain::Fixed(NonZeroUsize::new(16).unwrap());
    /// assert_eq!(fixed.resolve(1_000), 16);
    /// assert!(Grain::Auto.resolve(0) >= 1);
    /// ```
    pub fn resolve(self, length: usize) -> usize {
        match self {
            Self::Fixed(grain) => grain.get(),
            Self::Auto => {
                let leaves = num_cpus::get().max(1) * LEAVES_PER_THREAD;
                length.div_ceil(leaves).max(1)
            }
        }
    }
}

/// Tuning for the fold path.
///
/// The grain never affects the result of a fold that honours the
/// associativity contract, only how the work is divided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FoldConfig {
    grain: Grain,
}

impl FoldConfig {
    /// Creates a configuration with [`Grain::Auto`].
    pub const fn new() -> Self {
        Self { grain: Grain::Auto }
    }

    /// Creates a configuration with a fixed grain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroGrain`] when `grain` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reducers::fold::{ConfigError, FoldConfig};
    ///
    /// assert!(FoldConfig::with_grain(64).is_ok());
    /// assert_eq!(FoldConfig::with_grain(0), Err(ConfigError::ZeroGrain));
    /// ```
    pub fn with_grain(grain: usize) -> Result<Self, ConfigError> {
        NonZeroUsize::new(grain)
            .map(|grain| Self {
                grain: Grain::Fixed(grain),
            })
            .ok_or(ConfigError::ZeroGrain)
    }

    /// Returns the grain policy.
    pub const fn grain(&self) -> Grain {
        self.grain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_is_auto() {
        assert_eq!(FoldConfig::default().grain(), Grain::Auto);
        assert_eq!(FoldConfig::new(), FoldConfig::default());
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(7)]
    #[case(1_000_000)]
    fn auto_grain_is_positive(#[case] length: usize) {
        assert!(Grain::Auto.resolve(length) >= 1);
    }

    #[rstest]
    fn auto_grain_produces_multiple_leaves_for_large_inputs() {
        let length = 1_000_000;
        assert!(Grain::Auto.resolve(length) < length);
    }

    #[rstest]
    #[case(1)]
    #[case(32)]
    fn fixed_grain_ignores_length(#[case] grain: usize) {
        let config = FoldConfig::with_grain(grain).unwrap();
        assert_eq!(config.grain().resolve(10), grain);
        assert_eq!(config.grain().resolve(10_000), grain);
    }

    #[rstest]
    fn zero_grain_is_rejected() {
        let error = FoldConfig::with_grain(0).unwrap_err();
        assert_eq!(error, ConfigError::ZeroGrain);
        assert_eq!(error.to_string(), "fold grain must be at least 1");
    }
}
