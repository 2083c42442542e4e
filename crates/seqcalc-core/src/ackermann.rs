//! Ackermann–Péter function with closed forms, memoization and a depth budget.
//!
//! ```text
//! A(0, n) = n + 1
//! A(m, 0) = A(m - 1, 1)               m > 0
//! A(m, n) = A(m - 1, A(m, n - 1))     m > 0, n > 0
//! ```
//!
//! Rows m = 0..=3 are answered in closed form:
//! A(1, n) = n + 2, A(2, n) = 2n + 3, A(3, n) = 2^(n+3) − 3.
//! Rows m >= 4 recurse. The second argument of an inner call is itself an
//! Ackermann value, so `n` is carried as `BigUint` below the top level.
//!
//! Recursion depth is counted explicitly and fails with
//! [`CalcError::RecursionLimitExceeded`] once it crosses
//! [`Options::ackermann_max_depth`], so the evaluation never relies on the
//! thread's stack guard. The depth is clamped to [`MAX_ACKERMANN_DEPTH`]
//! whatever the options say.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::debug;

use crate::arith::{double_plus_3, exponent_within, pow2_minus_3};
use crate::constants::MAX_ACKERMANN_DEPTH;
use crate::engine::Engine;
use crate::error::CalcError;
use crate::memo::MemoCache;
use crate::options::Options;

/// Ackermann engine. Each `compute` call owns a fresh [`MemoCache`].
#[derive(Debug, Default, Clone, Copy)]
pub struct AckermannEngine;

impl AckermannEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Why an evaluation stopped early. Mapped to a [`CalcError`] carrying the
/// top-level arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Halt {
    Depth,
    Magnitude,
}

/// One top-level evaluation: its cache and its limits.
struct Evaluation {
    cache: MemoCache,
    max_depth: usize,
    max_exponent: u64,
    peak_depth: usize,
}

impl Evaluation {
    fn new(opts: &Options) -> Self {
        Self {
            cache: MemoCache::new(),
            max_depth: opts.ackermann_max_depth.min(MAX_ACKERMANN_DEPTH),
            max_exponent: opts.ackermann_max_exponent,
            peak_depth: 0,
        }
    }

    fn eval(&mut self, m: u64, n: BigUint, depth: usize) -> Result<BigUint, Halt> {
        if depth > self.max_depth {
            return Err(Halt::Depth);
        }
        self.peak_depth = self.peak_depth.max(depth);

        if let Some(hit) = self.cache.get(m, &n) {
            return Ok(hit.clone());
        }

        let result = match m {
            0 => &n + 1u32,
            1 => &n + 2u32,
            2 => double_plus_3(&n),
            3 => {
                let exp = exponent_within(&n, 3, self.max_exponent).ok_or(Halt::Magnitude)?;
                pow2_minus_3(exp)
            }
            _ if n.is_zero() => self.eval(m - 1, BigUint::one(), depth + 1)?,
            _ => {
                let inner = self.eval(m, &n - 1u32, depth + 1)?;
                self.eval(m - 1, inner, depth + 1)?
            }
        };

        Ok(self.cache.insert(m, n, result).clone())
    }
}

/// Compute A(m, n) under the limits in `opts`.
pub fn ackermann(m: u64, n: u64, opts: &Options) -> Result<BigUint, CalcError> {
    let mut evaluation = Evaluation::new(opts);
    let outcome = evaluation.eval(m, BigUint::from(n), 1);

    debug!(
        m,
        n,
        cached = evaluation.cache.len(),
        hits = evaluation.cache.hits(),
        peak_depth = evaluation.peak_depth,
        "Ackermann evaluation finished"
    );

    outcome.map_err(|halt| match halt {
        Halt::Depth => CalcError::RecursionLimitExceeded { m, n },
        Halt::Magnitude => CalcError::MagnitudeExceeded { m, n },
    })
}

impl Engine for AckermannEngine {
    type Args = (u64, u64);

    fn compute(&self, (m, n): (u64, u64), opts: &Options) -> Result<BigUint, CalcError> {
        ackermann(m, n, opts)
    }

    fn name(&self) -> &'static str {
        "ackermann"
    }
}
