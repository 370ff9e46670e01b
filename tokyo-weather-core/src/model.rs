use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic point sent with every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

/// The only supported location.
pub const TOKYO: Location = Location { lat: 35.6762, lon: 139.6503 };

/// Unit system passed to the API as `units`.
///
/// Anything outside the three known values is kept as-is and left for the
/// remote API to accept or reject.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Standard,
    Other(String),
}

impl Units {
    pub fn as_str(&self) -> &str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
            Units::Other(s) => s.as_str(),
        }
    }
}

impl From<&str> for Units {
    fn from(value: &str) -> Self {
        match value {
            "metric" => Units::Metric,
            "imperial" => Units::Imperial,
            "standard" => Units::Standard,
            other => Units::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DEFAULT_LANG: &str = "ja";

/// Per-call parameters of a current-weather request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub units: Units,
    pub lang: String,
}

impl WeatherQuery {
    pub fn new(units: impl Into<Units>, lang: impl Into<String>) -> Self {
        Self { units: units.into(), lang: lang.into() }
    }
}

impl Default for WeatherQuery {
    fn default() -> Self {
        Self { units: Units::Metric, lang: DEFAULT_LANG.to_string() }
    }
}

/// Current conditions at the time of the fetch.
///
/// Temperatures are in whatever unit system the request asked for; wind speed
/// is always reported in m/s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: Option<String>,
    pub observed_at: Option<DateTime<Utc>>,
    pub description: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
}
