//! Engine limits shared read-only across requests.

use crate::constants::{
    DEFAULT_ACKERMANN_MAX_DEPTH, DEFAULT_ACKERMANN_MAX_EXPONENT, DEFAULT_FIBONACCI_MAX_N,
    MAX_ACKERMANN_DEPTH,
};

/// Limits applied by the engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Largest accepted Fibonacci index (0 = unlimited).
    pub fibonacci_max_n: u64,
    /// Largest Ackermann recursion depth before failing, at most
    /// [`MAX_ACKERMANN_DEPTH`].
    pub ackermann_max_depth: usize,
    /// Largest exponent the m=3 closed form may materialize.
    pub ackermann_max_exponent: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            fibonacci_max_n: DEFAULT_FIBONACCI_MAX_N,
            ackermann_max_depth: DEFAULT_ACKERMANN_MAX_DEPTH,
            ackermann_max_exponent: DEFAULT_ACKERMANN_MAX_EXPONENT,
        }
    }
}

impl Options {
    /// Default options with the Fibonacci ceiling disabled.
    /// The Ackermann limits cannot be disabled.
    #[must_use]
    pub fn unbounded_fibonacci() -> Self {
        Self {
            fibonacci_max_n: 0,
            ..Self::default()
        }
    }

    /// Normalize options, applying defaults where the Ackermann limits are zero
    /// and clamping the depth to [`MAX_ACKERMANN_DEPTH`].
    ///
    /// `fibonacci_max_n` keeps zero as "unlimited".
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.ackermann_max_depth == 0 {
            self.ackermann_max_depth = DEFAULT_ACKERMANN_MAX_DEPTH;
        }
        self.ackermann_max_depth = self.ackermann_max_depth.min(MAX_ACKERMANN_DEPTH);
        if self.ackermann_max_exponent == 0 {
            self.ackermann_max_exponent = DEFAULT_ACKERMANN_MAX_EXPONENT;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(opts.fibonacci_max_n, DEFAULT_FIBONACCI_MAX_N);
        assert_eq!(opts.ackermann_max_depth, DEFAULT_ACKERMANN_MAX_DEPTH);
        assert_eq!(opts.ackermann_max_exponent, DEFAULT_ACKERMANN_MAX_EXPONENT);
    }

    #[test]
    fn normalize_zero_limits() {
        let opts = Options {
            fibonacci_max_n: 0,
            ackermann_max_depth: 0,
            ackermann_max_exponent: 0,
        };
        let normalized = opts.normalize();
        assert_eq!(normalized.fibonacci_max_n, 0);
        assert_eq!(normalized.ackermann_max_depth, DEFAULT_ACKERMANN_MAX_DEPTH);
        assert_eq!(
            normalized.ackermann_max_exponent,
            DEFAULT_ACKERMANN_MAX_EXPONENT
        );
    }

    #[test]
    fn normalize_clamps_depth() {
        let opts = Options {
            ackermann_max_depth: 1_000_000,
            ..Options::default()
        }
        .normalize();
        assert_eq!(opts.ackermann_max_depth, MAX_ACKERMANN_DEPTH);

        let opts = Options {
            ackermann_max_depth: 10,
            ..Options::default()
        }
        .normalize();
        assert_eq!(opts.ackermann_max_depth, 10);
    }

    #[test]
    fn unbounded_fibonacci_keeps_ackermann_limits() {
        let opts = Options::unbounded_fibonacci();
        assert_eq!(opts.fibonacci_max_n, 0);
        assert_eq!(opts.ackermann_max_depth, DEFAULT_ACKERMANN_MAX_DEPTH);
    }
}
