use anyhow::Context;
use clap::Parser;
use weatherstack_core::{Config, collect, provider_from_config, table};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather-data",
    version,
    about = "Fetch current weather for several locations and save it to CSV"
)]
pub struct Cli {
    /// Locations to fetch weather data for, separated by spaces.
    /// Example: London Singapore Shanghai
    #[arg(required = true, num_args = 1..)]
    pub locations: Vec<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::resolve().context("Failed to load configuration")?;
        let provider = provider_from_config(&config)?;

        let collection = collect(provider.as_ref(), &self.locations, |failure| {
            println!("{failure}");
        })
        .await;

        if !collection.failures.is_empty() {
            log::warn!(
                "{} of {} location(s) produced no record",
                collection.failures.len(),
                collection.outcomes()
            );
        }

        table::write_csv(&config.output_path, &collection.records)?;
        println!("{}", table::render(&collection.records));

        Ok(())
    }
}
