//! Wall-clock timing for computations and whole requests.

use std::time::{Duration, Instant};

/// A value together with how long it took to produce.
#[derive(Debug, Clone)]
pub struct Timed<T> {
    /// The produced value.
    pub value: T,
    /// Wall-clock time spent producing it.
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Elapsed time formatted as seconds, e.g. `"0.00012s"`.
    #[must_use]
    pub fn seconds(&self) -> String {
        format_seconds(self.elapsed)
    }
}

/// Run `f` and record how long it took. The result is returned untouched.
pub fn timed<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// Stopwatch started when request handling begins.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Start a new stopwatch.
    #[must_use]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time since the stopwatch was started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time since start, formatted like [`format_seconds`].
    #[must_use]
    pub fn seconds(&self) -> String {
        format_seconds(self.elapsed())
    }
}

/// Format a duration as seconds with five decimals and an `s` suffix.
#[must_use]
pub fn format_seconds(d: Duration) -> String {
    format!("{:.5}s", d.as_secs_f64())
}

/// Parse a string produced by [`format_seconds`] back into seconds.
#[must_use]
pub fn parse_seconds(s: &str) -> Option<f64> {
    s.strip_suffix('s')?.parse().ok()
}
