//! Sequential collection of records across locations.

use std::fmt;

use crate::{
    model::WeatherRecord,
    provider::{FailureClass, FetchError, WeatherProvider},
};

/// What happened to a single location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    TransportError,
    ApiError,
}

/// A location that produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub location: String,
    pub error: FetchError,
}

impl Failure {
    pub fn outcome(&self) -> Outcome {
        match self.error.class() {
            FailureClass::Transport => Outcome::TransportError,
            FailureClass::Api => Outcome::ApiError,
        }
    }
}

/// The diagnostic line shown to the operator.
impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            FetchError::Api(api) => {
                write!(f, "No weather data found for {}. Error: {api}", self.location)
            }
            other => write!(f, "Error fetching data for {}: {other}", self.location),
        }
    }
}

#[derive(Debug, Default)]
pub struct Collection {
    /// In input order.
    pub records: Vec<WeatherRecord>,
    pub failures: Vec<Failure>,
}

impl Collection {
    pub fn outcomes(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

/// Fetch each location in turn. A failing location is reported through
/// `on_failure` as it happens and contributes no record; it never stops
/// the run.
pub async fn collect<S, F>(
    provider: &dyn WeatherProvider,
    locations: &[S],
    mut on_failure: F,
) -> Collection
where
    S: AsRef<str>,
    F: FnMut(&Failure),
{
    let mut collection = Collection::default();

    for location in locations {
        let location = location.as_ref();

        match provider.current(location).await {
            Ok(record) => {
                log::debug!("collected conditions for {location}");
                collection.records.push(record);
            }
            Err(error) => {
                let failure = Failure { location: location.to_string(), error };
                log::warn!("{:?}: {failure}", failure.outcome());
                on_failure(&failure);
                collection.failures.push(failure);
            }
        }
    }

    collection
}
