//! # seqcalc-server
//!
//! HTTP front for the `seqcalc-core` engines.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod timing;

pub use app::router;
pub use config::ServerConfig;
