//! Validated requests and their dispatch to the engines.

use std::fmt;

use num_bigint::BigUint;
use tracing::{info, warn};

use crate::ackermann::AckermannEngine;
use crate::engine::Engine;
use crate::error::CalcError;
use crate::factorial::FactorialEngine;
use crate::fibonacci::FibonacciEngine;
use crate::options::Options;
use crate::timing::{timed, Timed};
use crate::validation::{parse_pair, parse_single};

/// The three sequence computations the service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    Factorial,
    Fibonacci,
    Ackermann,
}

impl EngineKind {
    /// All kinds, in route order.
    pub const ALL: [EngineKind; 3] = [Self::Factorial, Self::Fibonacci, Self::Ackermann];

    /// Human-readable description used in log lines.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Factorial => "factorial",
            Self::Fibonacci => "nth Fibonacci number",
            Self::Ackermann => "Ackermann function",
        }
    }

    /// Lowercase name, also the last path segment of the route.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Factorial => FactorialEngine.name(),
            Self::Fibonacci => FibonacciEngine.name(),
            Self::Ackermann => AckermannEngine.name(),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated computation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Computation {
    Factorial { n: u64 },
    Fibonacci { n: u64 },
    Ackermann { m: u64, n: u64 },
}

impl Computation {
    /// Build a computation from textual query parameters.
    ///
    /// `lookup` returns the raw value of a parameter, or `None` when absent.
    pub fn from_query<'a, F>(kind: EngineKind, lookup: F) -> Result<Self, CalcError>
    where
        F: Fn(&'static str) -> Option<&'a str>,
    {
        match kind {
            EngineKind::Factorial => Ok(Self::Factorial {
                n: parse_single(lookup("n"), "n")?,
            }),
            EngineKind::Fibonacci => Ok(Self::Fibonacci {
                n: parse_single(lookup("n"), "n")?,
            }),
            EngineKind::Ackermann => {
                let (m, n) = parse_pair((lookup("m"), lookup("n")), ("m", "n"))?;
                Ok(Self::Ackermann { m, n })
            }
        }
    }

    #[must_use]
    pub fn kind(&self) -> EngineKind {
        match self {
            Self::Factorial { .. } => EngineKind::Factorial,
            Self::Fibonacci { .. } => EngineKind::Fibonacci,
            Self::Ackermann { .. } => EngineKind::Ackermann,
        }
    }

    /// Run the matching engine.
    pub fn run(&self, opts: &Options) -> Result<BigUint, CalcError> {
        match *self {
            Self::Factorial { n } => FactorialEngine.compute(n, opts),
            Self::Fibonacci { n } => FibonacciEngine.compute(n, opts),
            Self::Ackermann { m, n } => AckermannEngine.compute((m, n), opts),
        }
    }

    /// Run the matching engine, timing only the computation, and log the outcome.
    pub fn run_timed(&self, opts: &Options) -> Timed<Result<BigUint, CalcError>> {
        let outcome = timed(|| self.run(opts));
        match &outcome.value {
            Ok(_) => info!(
                engine = %self.kind(),
                elapsed = %outcome.seconds(),
                "calculated {} for {}",
                self.kind().description(),
                self
            ),
            Err(e) => warn!(
                engine = %self.kind(),
                kind = e.kind(),
                elapsed = %outcome.seconds(),
                "{e}"
            ),
        }
        outcome
    }
}

impl fmt::Display for Computation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Factorial { n } | Self::Fibonacci { n } => write!(f, "n={n}"),
            Self::Ackermann { m, n } => write!(f, "m={m}, n={n}"),
        }
    }
}
