use async_trait::async_trait;
use std::fmt::{self, Debug};
use thiserror::Error;

use crate::{Config, WeatherRecord, provider::weatherstack::WeatherstackProvider};

pub mod weatherstack;

/// Per-location outcome class used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureClass {
    /// The request did not produce a usable 2xx JSON body.
    Transport,
    /// The API answered but reported an error instead of conditions.
    Api,
}

/// Error payload weatherstack returns in place of `current`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiError {
    pub code: Option<i64>,
    pub kind: Option<String>,
    pub info: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.info, self.code, &self.kind) {
            (None, None, None) => f.write_str("no error details"),
            (info, code, kind) => {
                f.write_str(info.as_deref().or(kind.as_deref()).unwrap_or("unknown error"))?;
                if let Some(code) = code {
                    write!(f, " (code {code})")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response body is not valid JSON: {0}")]
    Decode(String),

    #[error("{0}")]
    Api(ApiError),
}

impl FetchError {
    pub fn class(&self) -> FailureClass {
        match self {
            FetchError::Transport(_) | FetchError::Status { .. } | FetchError::Decode(_) => {
                FailureClass::Transport
            }
            FetchError::Api(_) => FailureClass::Api,
        }
    }
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for one location query.
    async fn current(&self, query: &str) -> Result<WeatherRecord, FetchError>;
}

/// Construct the weatherstack provider from config.
///
/// Fails when no access key is configured, before any request is made.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let access_key = config.access_key()?;

    Ok(Box::new(WeatherstackProvider::new(access_key.to_owned(), config.base_url.clone())))
}
