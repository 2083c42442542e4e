//! Checked helpers over `BigUint` used by the closed-form shortcuts.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

/// Compute 2^exp − 3 with a shift instead of a generic `pow`.
///
/// `exp` must be at least 2.
#[must_use]
pub fn pow2_minus_3(exp: u64) -> BigUint {
    debug_assert!(exp >= 2, "2^{exp} - 3 would underflow");
    (BigUint::one() << exp) - 3u32
}

/// Convert `n + offset` to a native exponent, or `None` if it would exceed
/// `limit` (or does not fit in a `u64`).
#[must_use]
pub fn exponent_within(n: &BigUint, offset: u64, limit: u64) -> Option<u64> {
    n.to_u64()
        .and_then(|v| v.checked_add(offset))
        .filter(|&e| e <= limit)
}

/// Double `n` and add three, the m=2 closed form.
#[must_use]
pub fn double_plus_3(n: &BigUint) -> BigUint {
    (n << 1u32) + 3u32
}
