//! Constants for engine limits and the Fibonacci fast path.

/// Default ceiling on the Fibonacci index (0 disables the ceiling).
pub const DEFAULT_FIBONACCI_MAX_N: u64 = 100_000;

/// Default ceiling on Ackermann recursion depth.
pub const DEFAULT_ACKERMANN_MAX_DEPTH: usize = 1_000;

/// Hard ceiling on Ackermann recursion depth.
///
/// Sized so an evaluation fits a 2 MiB thread stack (tokio's blocking-pool
/// default) in unoptimized builds. Larger configured depths are clamped.
pub const MAX_ACKERMANN_DEPTH: usize = 1_000;

/// Default ceiling on the exponent of 2^(n+3) in the m=3 closed form.
/// 2^262144 has 78,914 decimal digits.
pub const DEFAULT_ACKERMANN_MAX_EXPONENT: u64 = 262_144;

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Precomputed Fibonacci values for n = 0..=93 (fast path).
///
/// F(94) = 19,740,274,219,868,223,167 overflows `u64::MAX`.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};
