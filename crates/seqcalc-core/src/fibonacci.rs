//! Exact iterative Fibonacci.
//!
//! Uses the linear recurrence F(k+1) = F(k) + F(k-1) on `BigUint`, keeping
//! only the two most recent terms. Indices up to 93 come straight from
//! [`FIB_TABLE`].

use num_bigint::BigUint;

use crate::constants::{FIB_TABLE, MAX_FIB_U64};
use crate::engine::Engine;
use crate::error::CalcError;
use crate::options::Options;

/// Fibonacci engine with an optional ceiling on n.
#[derive(Debug, Default, Clone, Copy)]
pub struct FibonacciEngine;

impl FibonacciEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Compute F(n) with F(0) = 0, F(1) = 1.
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    if n <= MAX_FIB_U64 {
        #[allow(clippy::cast_possible_truncation)]
        return BigUint::from(FIB_TABLE[n as usize]);
    }

    let mut a = BigUint::from(FIB_TABLE[MAX_FIB_U64 as usize - 1]);
    let mut b = BigUint::from(FIB_TABLE[MAX_FIB_U64 as usize]);
    for _ in MAX_FIB_U64..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    b
}

impl Engine for FibonacciEngine {
    type Args = u64;

    fn compute(&self, n: u64, opts: &Options) -> Result<BigUint, CalcError> {
        if opts.fibonacci_max_n != 0 && n > opts.fibonacci_max_n {
            return Err(CalcError::ResourceExceeded {
                param: "n",
                value: n.to_string(),
            });
        }
        Ok(fibonacci(n))
    }

    fn name(&self) -> &'static str {
        "fibonacci"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const F1200: &str = "27269884455406270157991615313642198705000779992917725821180502894974726476373026809482509284562310031170172380127627214493597616743856443016039972205847405917634660750474914561879656763268658528092195715626073248224067794253809132219056382939163918400";

    #[test]
    fn first_twenty() {
        let expected: [u64; 20] = [
            0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987, 1597, 2584, 4181,
        ];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(fibonacci(n as u64), BigUint::from(*want), "F({n})");
        }
    }

    #[test]
    fn crosses_table_boundary() {
        assert_eq!(
            fibonacci(93),
            BigUint::from(12_200_160_415_121_876_738u64)
        );
        assert_eq!(fibonacci(94).to_string(), "19740274219868223167");
        assert_eq!(
            fibonacci(100).to_string(),
            "354224848179261915075"
        );
    }

    #[test]
    fn exact_at_1200() {
        let s = fibonacci(1200).to_string();
        assert_eq!(s.len(), 251);
        assert_eq!(s, F1200);
    }

    #[test]
    fn ceiling_rejects_large_n() {
        let engine = FibonacciEngine::new();
        let opts = Options {
            fibonacci_max_n: 1000,
            ..Options::default()
        };
        assert!(engine.compute(1000, &opts).is_ok());
        let err = engine.compute(1001, &opts).unwrap_err();
        assert_eq!(err.to_string(), "n=1001 is too big");
    }

    #[test]
    fn default_ceiling_rejects_one_million() {
        let engine = FibonacciEngine::new();
        let err = engine.compute(1_000_000, &Options::default()).unwrap_err();
        assert!(matches!(err, CalcError::ResourceExceeded { param: "n", .. }));
    }

    #[test]
    fn zero_ceiling_is_unlimited() {
        let engine = FibonacciEngine::new();
        let opts = Options::unbounded_fibonacci();
        assert_eq!(engine.compute(1200, &opts).unwrap().to_string(), F1200);
    }
}
