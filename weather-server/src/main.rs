//! Binary crate for the `weather-server` HTTP proxy.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Installing logging
//! - Running the listener until Ctrl-C / SIGTERM

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,weather_server=debug,weather_core=debug")
            }),
        )
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
