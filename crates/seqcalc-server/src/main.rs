//! SeqCalc HTTP server.

use anyhow::Result;
use seqcalc_server::{app, config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Parse CLI args and run
    let config = config::ServerConfig::parse();
    app::run(config).await
}
