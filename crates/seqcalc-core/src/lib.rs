//! # seqcalc-core
//!
//! Arbitrary-precision factorial, Fibonacci and Ackermann engines, plus the
//! validation and timing pieces the HTTP layer wraps around them.
//!
//! All engines are pure: no engine keeps state between calls, and the
//! Ackermann memo cache lives only for one top-level evaluation.

pub mod ackermann;
pub mod arith;
pub mod computation;
pub mod constants;
pub mod engine;
pub mod error;
pub mod factorial;
pub mod fibonacci;
pub mod memo;
pub mod options;
pub mod timing;
pub mod validation;

// Re-exports
pub use computation::{Computation, EngineKind};
pub use engine::Engine;
pub use error::{CalcError, Params};
pub use options::Options;
pub use timing::{format_seconds, timed, Stopwatch, Timed};

use num_bigint::BigUint;

/// Compute F(n) exactly.
///
/// # Example
/// ```
/// assert_eq!(seqcalc_core::fibonacci(10).to_string(), "55");
/// assert_eq!(seqcalc_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    fibonacci::fibonacci(n)
}

/// Compute n! exactly.
///
/// # Example
/// ```
/// assert_eq!(seqcalc_core::factorial(5).to_string(), "120");
/// ```
#[must_use]
pub fn factorial(n: u64) -> BigUint {
    factorial::factorial(n)
}
