use serde::{Deserialize, Serialize};

/// Format of the `Request Time` column.
pub const REQUEST_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the output table: current conditions for a single location.
///
/// Values keep the textual form the API sent them in; a field the response
/// did not carry is `None` and becomes an empty CSV cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    #[serde(rename = "Location")]
    pub location: Option<String>,
    #[serde(rename = "Region")]
    pub region: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Latitude")]
    pub latitude: Option<String>,
    #[serde(rename = "Longitude")]
    pub longitude: Option<String>,
    #[serde(rename = "Local Time")]
    pub local_time: Option<String>,
    #[serde(rename = "Temperature")]
    pub temperature: Option<String>,
    #[serde(rename = "Humidity")]
    pub humidity: Option<String>,
    #[serde(rename = "Weather Description")]
    pub weather_description: Option<String>,
    #[serde(rename = "Wind Speed")]
    pub wind_speed: Option<String>,
    #[serde(rename = "Wind Direction")]
    pub wind_direction: Option<String>,
    #[serde(rename = "Pressure")]
    pub pressure: Option<String>,
    #[serde(rename = "Precipitation")]
    pub precipitation: Option<String>,
    #[serde(rename = "Feels Like")]
    pub feels_like: Option<String>,
    #[serde(rename = "Visibility")]
    pub visibility: Option<String>,
    #[serde(rename = "Observation Time")]
    pub observation_time: Option<String>,
    #[serde(rename = "Request Time")]
    pub request_time: String,
}

impl WeatherRecord {
    /// Column names, in output order.
    pub const FIELDS: [&'static str; 17] = [
        "Location",
        "Region",
        "Country",
        "Latitude",
        "Longitude",
        "Local Time",
        "Temperature",
        "Humidity",
        "Weather Description",
        "Wind Speed",
        "Wind Direction",
        "Pressure",
        "Precipitation",
        "Feels Like",
        "Visibility",
        "Observation Time",
        "Request Time",
    ];

    /// Field values aligned with [`WeatherRecord::FIELDS`].
    pub fn values(&self) -> [Option<&str>; 17] {
        [
            self.location.as_deref(),
            self.region.as_deref(),
            self.country.as_deref(),
            self.latitude.as_deref(),
            self.longitude.as_deref(),
            self.local_time.as_deref(),
            self.temperature.as_deref(),
            self.humidity.as_deref(),
            self.weather_description.as_deref(),
            self.wind_speed.as_deref(),
            self.wind_direction.as_deref(),
            self.pressure.as_deref(),
            self.precipitation.as_deref(),
            self.feels_like.as_deref(),
            self.visibility.as_deref(),
            self.observation_time.as_deref(),
            Some(self.request_time.as_str()),
        ]
    }

    /// Equality on everything but the request timestamp.
    pub fn same_observation(&self, other: &Self) -> bool {
        self.values()[..16] == other.values()[..16]
    }
}
