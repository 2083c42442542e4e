//! Server configuration from CLI flags and environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use seqcalc_core::constants::{
    DEFAULT_ACKERMANN_MAX_DEPTH, DEFAULT_ACKERMANN_MAX_EXPONENT, DEFAULT_FIBONACCI_MAX_N,
    MAX_ACKERMANN_DEPTH,
};
use seqcalc_core::Options;

/// SeqCalc — factorial, Fibonacci and Ackermann over HTTP.
#[derive(Parser, Debug, Clone)]
#[command(name = "seqcalc-server", version, about)]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0", env = "SEQCALC_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = 5000, env = "SEQCALC_PORT")]
    pub port: u16,

    /// Directory holding the prebuilt front-end.
    #[arg(long, default_value = "dist", env = "SEQCALC_STATIC_DIR")]
    pub static_dir: PathBuf,

    /// Largest accepted Fibonacci index (0 = unlimited).
    #[arg(long, default_value_t = DEFAULT_FIBONACCI_MAX_N, env = "SEQCALC_FIBONACCI_MAX_N")]
    pub fibonacci_max_n: u64,

    /// Ackermann recursion depth ceiling.
    #[arg(
        long,
        default_value_t = DEFAULT_ACKERMANN_MAX_DEPTH,
        env = "SEQCALC_ACKERMANN_MAX_DEPTH",
        value_parser = parse_depth
    )]
    pub ackermann_max_depth: usize,

    /// Largest power-of-two exponent the Ackermann engine may materialize.
    #[arg(
        long,
        default_value_t = DEFAULT_ACKERMANN_MAX_EXPONENT,
        env = "SEQCALC_ACKERMANN_MAX_EXPONENT"
    )]
    pub ackermann_max_exponent: u64,
}

impl ServerConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Engine limits derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            fibonacci_max_n: self.fibonacci_max_n,
            ackermann_max_depth: self.ackermann_max_depth,
            ackermann_max_exponent: self.ackermann_max_exponent,
        }
        .normalize()
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip = self
            .host
            .parse()
            .with_context(|| format!("invalid host address {:?}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Parse a recursion depth in `1..=MAX_ACKERMANN_DEPTH`.
fn parse_depth(s: &str) -> Result<usize, String> {
    let depth: usize = s.parse().map_err(|e: std::num::ParseIntError| e.to_string())?;
    if (1..=MAX_ACKERMANN_DEPTH).contains(&depth) {
        Ok(depth)
    } else {
        Err(format!("depth must be between 1 and {MAX_ACKERMANN_DEPTH}"))
    }
}
