//! Binary crate for the `weather-data` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Loading a local `.env` and logging setup
//! - Printing diagnostics and the collected table

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();

    // A missing .env is normal; variables already set win.
    let dotenv = dotenvy::dotenv();

    let env = env_logger::Env::default().default_filter_or("error");
    env_logger::init_from_env(env);

    if let Ok(path) = dotenv {
        log::debug!("loaded environment from {}", path.display());
    }

    cmd.run().await
}
