//! Binary crate for the weather forecast HTTP service.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging initialization
//! - Wiring the warp route to the core weather service

use clap::Parser;

mod cli;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
