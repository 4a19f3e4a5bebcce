//! Flattening of a weatherstack `current` response into a [`WeatherRecord`].

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::model::{REQUEST_TIME_FORMAT, WeatherRecord};

/// Follow `path` through nested objects. Missing keys and non-object
/// intermediates give `None`.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |node, key| node.as_object()?.get(*key))
}

/// Textual form of a scalar; null, arrays and objects have none.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Scalar at `path`, as text.
pub fn text_at(value: &Value, path: &[&str]) -> Option<String> {
    lookup(value, path).and_then(scalar_text)
}

/// Scalars of the list at `path` joined with `", "`.
pub fn joined_at(value: &Value, path: &[&str]) -> Option<String> {
    let items = lookup(value, path)?.as_array()?;
    let joined = items.iter().filter_map(scalar_text).collect::<Vec<_>>().join(", ");

    (!joined.is_empty()).then_some(joined)
}

/// Build a record from a response body that carries a `current` section.
///
/// `query` stands in for the location name when the response has no
/// `name` key; a present but null name stays empty.
pub fn normalize(query: &str, body: &Value, requested_at: NaiveDateTime) -> WeatherRecord {
    let location = |key: &str| text_at(body, &["location", key]);
    let current = |key: &str| text_at(body, &["current", key]);

    WeatherRecord {
        location: lookup(body, &["location", "name"])
            .map_or_else(|| Some(query.to_string()), scalar_text),
        region: location("region"),
        country: location("country"),
        latitude: location("lat"),
        longitude: location("lon"),
        local_time: location("localtime"),
        temperature: current("temperature"),
        humidity: current("humidity"),
        weather_description: joined_at(body, &["current", "weather_descriptions"]),
        wind_speed: current("wind_speed"),
        wind_direction: current("wind_dir"),
        pressure: current("pressure"),
        precipitation: current("precip"),
        feels_like: current("feelslike"),
        visibility: current("visibility"),
        observation_time: current("observation_time"),
        request_time: requested_at.format(REQUEST_TIME_FORMAT).to_string(),
    }
}
