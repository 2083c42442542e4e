//! Golden file integration tests.
//!
//! Reads tests/testdata/sequence_golden.json and checks every engine against
//! values computed independently with exact integer arithmetic.

use serde::Deserialize;

use seqcalc_core::{CalcError, Computation, Options};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    fibonacci: Vec<SingleEntry>,
    factorial: Vec<SingleEntry>,
    ackermann: Vec<PairEntry>,
    ackermann_failures: Vec<FailureEntry>,
}

#[derive(Deserialize)]
struct Expected {
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    prefix: Option<String>,
    #[serde(default)]
    digits: Option<usize>,
}

#[derive(Deserialize)]
struct SingleEntry {
    n: u64,
    #[serde(flatten)]
    expected: Expected,
}

#[derive(Deserialize)]
struct PairEntry {
    m: u64,
    n: u64,
    #[serde(flatten)]
    expected: Expected,
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum FailureKind {
    Recursion,
    Magnitude,
}

#[derive(Deserialize)]
struct FailureEntry {
    m: u64,
    n: u64,
    error: FailureKind,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/sequence_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn run(computation: Computation) -> String {
    computation
        .run(&Options::unbounded_fibonacci())
        .unwrap_or_else(|e| panic!("{computation}: {e}"))
        .to_string()
}

fn check(label: &str, actual: &str, expected: &Expected) {
    if let Some(value) = &expected.value {
        assert_eq!(actual, value, "{label} mismatch");
    }
    if let Some(prefix) = &expected.prefix {
        assert!(
            actual.starts_with(prefix.as_str()),
            "{label} prefix mismatch: expected starts_with '{prefix}', got '{}'",
            &actual[..prefix.len().min(actual.len())],
        );
    }
    if let Some(digits) = expected.digits {
        assert_eq!(actual.len(), digits, "{label} digit count mismatch");
    }
}

// ---------------------------------------------------------------------------
// Golden values
// ---------------------------------------------------------------------------

#[test]
fn golden_fibonacci() {
    let data = load_golden_data();
    for entry in &data.fibonacci {
        let actual = run(Computation::Fibonacci { n: entry.n });
        check(&format!("F({})", entry.n), &actual, &entry.expected);
    }
}

#[test]
fn golden_factorial() {
    let data = load_golden_data();
    for entry in &data.factorial {
        let actual = run(Computation::Factorial { n: entry.n });
        check(&format!("{}!", entry.n), &actual, &entry.expected);
    }
}

#[test]
fn golden_ackermann() {
    let data = load_golden_data();
    for entry in &data.ackermann {
        let actual = run(Computation::Ackermann {
            m: entry.m,
            n: entry.n,
        });
        check(&format!("A({}, {})", entry.m, entry.n), &actual, &entry.expected);
    }
}

#[test]
fn golden_ackermann_failures() {
    let data = load_golden_data();
    let opts = Options::default();
    for entry in &data.ackermann_failures {
        let (m, n) = (entry.m, entry.n);
        let err = Computation::Ackermann { m, n }
            .run(&opts)
            .expect_err("evaluation should hit a limit");
        match entry.error {
            FailureKind::Recursion => {
                assert_eq!(err, CalcError::RecursionLimitExceeded { m, n });
            }
            FailureKind::Magnitude => {
                assert_eq!(err, CalcError::MagnitudeExceeded { m, n });
            }
        }
    }
}
