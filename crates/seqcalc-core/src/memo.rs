//! Per-call memoization cache for the Ackermann engine.

use std::collections::HashMap;

use num_bigint::BigUint;

/// Map from `(m, n)` to a computed `A(m, n)`.
///
/// Rows are keyed by `m` so lookups borrow `n` instead of cloning it.
/// An entry is never overwritten once written.
#[derive(Debug, Default)]
pub struct MemoCache {
    rows: HashMap<u64, HashMap<BigUint, BigUint>>,
    hits: u64,
}

impl MemoCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `(m, n)`, counting a hit when present.
    pub fn get(&mut self, m: u64, n: &BigUint) -> Option<&BigUint> {
        let value = self.rows.get(&m)?.get(n)?;
        self.hits += 1;
        Some(value)
    }

    /// Record `(m, n) -> value` and return the stored entry.
    ///
    /// If the key is already present the existing entry is kept.
    pub fn insert(&mut self, m: u64, n: BigUint, value: BigUint) -> &BigUint {
        self.rows.entry(m).or_default().entry(n).or_insert(value)
    }

    /// Number of cached pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.values().all(HashMap::is_empty)
    }

    /// Number of successful lookups so far.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }
}
