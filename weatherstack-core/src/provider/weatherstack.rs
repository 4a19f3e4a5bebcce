use async_trait::async_trait;
use chrono::Local;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::error::Error as _;

use crate::{
    extract::{lookup, normalize, text_at},
    model::WeatherRecord,
};

use super::{ApiError, FetchError, WeatherProvider};

#[derive(Debug, Clone)]
pub struct WeatherstackProvider {
    access_key: String,
    base_url: String,
    http: Client,
}

impl WeatherstackProvider {
    /// Client with library defaults: no explicit timeout, no retries.
    pub fn new(access_key: String, base_url: String) -> Self {
        Self { access_key, base_url, http: Client::new() }
    }

    async fn fetch_body(&self, query: &str) -> Result<Value, FetchError> {
        log::debug!("GET {} query={query}", self.base_url);

        let res = self
            .http
            .get(&self.base_url)
            .query(&[("access_key", self.access_key.as_str()), ("query", query)])
            .send()
            .await
            .map_err(transport_error)?;

        let status = res.status();
        let body = res.text().await.map_err(transport_error)?;

        classify_response(status, &body)
    }
}

#[async_trait]
impl WeatherProvider for WeatherstackProvider {
    async fn current(&self, query: &str) -> Result<WeatherRecord, FetchError> {
        let body = self.fetch_body(query).await?;
        Ok(normalize(query, &body, Local::now().naive_local()))
    }
}

/// Sort a raw response into conditions or a failure.
///
/// weatherstack reports most API errors with a 2xx status and an `error`
/// object in place of `current`.
pub fn classify_response(status: StatusCode, body: &str) -> Result<Value, FetchError> {
    if !status.is_success() {
        return Err(FetchError::Status { status: status.as_u16(), body: truncate_body(body) });
    }

    let parsed: Value = serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    if parsed.get("current").is_none() {
        return Err(FetchError::Api(api_error(&parsed)));
    }

    Ok(parsed)
}

fn api_error(body: &Value) -> ApiError {
    ApiError {
        code: lookup(body, &["error", "code"]).and_then(Value::as_i64),
        kind: text_at(body, &["error", "type"]),
        info: text_at(body, &["error", "info"]),
    }
}

// The request URL carries the access key, so it never reaches the message.
fn transport_error(err: reqwest::Error) -> FetchError {
    FetchError::Transport(error_chain(&err.without_url()))
}

// reqwest's Display hides the underlying cause (DNS, refused, ...).
fn error_chain(err: &reqwest::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
