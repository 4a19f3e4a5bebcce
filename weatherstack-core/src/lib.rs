//! Core library for the `weather-data` CLI.
//!
//! This crate defines:
//! - Configuration & credential resolution
//! - The weatherstack client behind a provider abstraction
//! - Field extraction into flat weather records
//! - Sequential collection with per-location failure isolation
//! - CSV persistence and a text rendering of the result table
//!
//! It is used by `weatherstack-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod table;

#[cfg(test)]
mod test_server;

pub use config::{Config, ConfigError};
pub use model::WeatherRecord;
pub use pipeline::{Collection, Failure, Outcome, collect};
pub use provider::{FailureClass, FetchError, WeatherProvider, provider_from_config};
