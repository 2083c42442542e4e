//! The `Engine` trait implemented by each sequence computation.

use num_bigint::BigUint;

use crate::error::CalcError;
use crate::options::Options;

/// A pure computation over validated native arguments.
///
/// Implementations hold no state between calls; anything they cache lives
/// inside a single `compute` invocation.
pub trait Engine: Send + Sync {
    /// Validated arguments the engine consumes.
    type Args: Copy;

    /// Compute the result for `args` under the limits in `opts`.
    fn compute(&self, args: Self::Args, opts: &Options) -> Result<BigUint, CalcError>;

    /// Get the name of this engine.
    fn name(&self) -> &'static str;
}
