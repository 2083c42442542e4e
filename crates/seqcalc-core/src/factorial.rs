//! Iterative factorial over arbitrary-precision integers.
//!
//! Multiplies a running product by each integer in 2..=n. There is no ceiling
//! on n: the cost grows with n and callers are expected to self-limit.

use num_bigint::BigUint;
use num_traits::One;

use crate::engine::Engine;
use crate::error::CalcError;
use crate::options::Options;

/// Factorial engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct FactorialEngine;

impl FactorialEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Compute n! iteratively. 0! = 1! = 1.
#[must_use]
pub fn factorial(n: u64) -> BigUint {
    let mut product = BigUint::one();
    for k in 2..=n {
        product *= k;
    }
    product
}

impl Engine for FactorialEngine {
    type Args = u64;

    fn compute(&self, n: u64, _opts: &Options) -> Result<BigUint, CalcError> {
        Ok(factorial(n))
    }

    fn name(&self) -> &'static str {
        "factorial"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_ten() {
        let expected: [u64; 10] = [1, 1, 2, 6, 24, 120, 720, 5040, 40320, 362_880];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(factorial(n as u64), BigUint::from(*want), "{n}!");
        }
    }

    #[test]
    fn beyond_u64() {
        // 25! = 15511210043330985984000000 overflows u64
        assert_eq!(
            factorial(25).to_string(),
            "15511210043330985984000000"
        );
    }

    #[test]
    fn thousand_has_2568_digits() {
        let s = factorial(1000).to_string();
        assert_eq!(s.len(), 2568);
        assert!(s.starts_with("40238726007709377354"));
    }

    #[test]
    fn engine_ignores_options() {
        let engine = FactorialEngine::new();
        let opts = Options::default();
        assert_eq!(engine.compute(5, &opts).unwrap(), BigUint::from(120u32));
        assert_eq!(engine.name(), "factorial");
    }
}
