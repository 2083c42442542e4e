//! Error taxonomy shared by validation and the engines.

use std::fmt;

/// The query parameters an operation reads, used to word validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Params {
    /// A single parameter, e.g. `n`.
    Single(&'static str),
    /// A pair of parameters, e.g. `m` and `n`.
    Pair(&'static str, &'static str),
}

impl Params {
    fn describe_invalid(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(p) => write!(f, "query parameter {p} missing or invalid"),
            Self::Pair(a, b) => write!(f, "query parameter {a} and/or {b} missing or invalid"),
        }
    }

    fn describe_negative(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(p) => write!(f, "query parameter {p} cannot be negative"),
            Self::Pair(a, b) => write!(f, "neither query parameter {a} nor {b} can be negative"),
        }
    }
}

/// Wrapper so `thiserror` can delegate to [`Params`] formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invalid(pub Params);

impl fmt::Display for Invalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.describe_invalid(f)
    }
}

/// Wrapper so `thiserror` can delegate to [`Params`] formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Negative(pub Params);

impl fmt::Display for Negative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.describe_negative(f)
    }
}

/// Error type for argument validation and sequence computations.
///
/// Every variant is a client error: the computations are deterministic, so
/// retrying with the same input reproduces the same failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// An argument was missing, empty, or not a base-10 integer.
    #[error("{0}")]
    InvalidArgument(Invalid),

    /// An argument parsed but was below zero.
    #[error("{0}")]
    NegativeArgument(Negative),

    /// An argument is larger than the service is willing to compute for.
    #[error("{param}={value} is too big")]
    ResourceExceeded {
        /// Offending parameter name.
        param: &'static str,
        /// The value as supplied by the caller.
        value: String,
    },

    /// The Ackermann evaluation crossed the configured depth ceiling.
    #[error(
        "maximum recursion depth exceeded calculating Ackermann function where m={m} and n={n}"
    )]
    RecursionLimitExceeded {
        /// Top-level first argument.
        m: u64,
        /// Top-level second argument.
        n: u64,
    },

    /// The Ackermann evaluation would materialize a power of two above the
    /// configured exponent ceiling.
    #[error("result too large calculating Ackermann function where m={m} and n={n}")]
    MagnitudeExceeded {
        /// Top-level first argument.
        m: u64,
        /// Top-level second argument.
        n: u64,
    },
}

impl CalcError {
    /// Shorthand for [`CalcError::InvalidArgument`].
    #[must_use]
    pub fn invalid(params: Params) -> Self {
        Self::InvalidArgument(Invalid(params))
    }

    /// Shorthand for [`CalcError::NegativeArgument`].
    #[must_use]
    pub fn negative(params: Params) -> Self {
        Self::NegativeArgument(Negative(params))
    }

    /// Short machine-readable kind, used as a logging field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::NegativeArgument(_) => "negative_argument",
            Self::ResourceExceeded { .. } => "resource_exceeded",
            Self::RecursionLimitExceeded { .. } => "recursion_limit_exceeded",
            Self::MagnitudeExceeded { .. } => "magnitude_exceeded",
        }
    }
}
