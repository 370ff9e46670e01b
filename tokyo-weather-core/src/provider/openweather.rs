use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Request};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    config::ApiKey,
    error::{Result, WeatherError},
    model::{TOKYO, WeatherQuery, WeatherSnapshot},
    report::{self, ReportStyle},
};

use super::WeatherSource;

pub const CURRENT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// OpenWeatherMap client pinned to Tokyo.
#[derive(Debug, Clone)]
pub struct TokyoWeatherClient {
    api_key: ApiKey,
    base_url: String,
    http: Client,
}

impl TokyoWeatherClient {
    /// Build a client, taking the key from `api_key` or `OPENWEATHER_API_KEY`.
    pub fn new(api_key: Option<&str>) -> Result<Self> {
        Ok(Self::with_api_key(ApiKey::from_env(api_key)?))
    }

    pub fn with_api_key(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: CURRENT_WEATHER_URL.to_string(),
            http: Client::new(),
        }
    }

    /// Point the client at a different endpoint, e.g. a local proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// The exact request [`WeatherSource::current_weather_raw`] would send.
    pub fn request(&self, query: &WeatherQuery) -> Result<Request> {
        let lat = TOKYO.lat.to_string();
        let lon = TOKYO.lon.to_string();

        let request = self
            .http
            .get(&self.base_url)
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", query.units.as_str()),
                ("lang", query.lang.as_str()),
            ])
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(request)
    }

    /// Fetch and render the report in one step.
    pub async fn formatted_weather(&self, query: &WeatherQuery, style: ReportStyle) -> Result<String> {
        report::fetch_report(self, query, style).await
    }
}

#[async_trait]
impl WeatherSource for TokyoWeatherClient {
    async fn current_weather_raw(&self, query: &WeatherQuery) -> Result<Value> {
        let request = self.request(query)?;
        debug!(units = %query.units, lang = %query.lang, "requesting current weather for Tokyo");

        let res = self.http.execute(request).await?;

        let status = res.status();
        if !status.is_success() {
            warn!(%status, "OpenWeather current request failed");
        }

        let body = res.error_for_status()?.text().await?;
        let value: Value = serde_json::from_str(&body)?;

        Ok(value)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: Option<String>,
    dt: Option<i64>,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

/// Turn a decoded current-weather body into a [`WeatherSnapshot`].
pub fn parse_current(value: Value) -> Result<WeatherSnapshot> {
    let parsed: OwCurrentResponse = serde_json::from_value(value)?;

    let description = parsed
        .weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .ok_or(WeatherError::MissingField("weather[0].description"))?;

    Ok(WeatherSnapshot {
        location_name: parsed.name.filter(|n| !n.is_empty()),
        observed_at: parsed.dt.and_then(unix_to_utc),
        description,
        temperature: parsed.main.temp,
        feels_like: parsed.main.feels_like,
        temp_min: parsed.main.temp_min,
        temp_max: parsed.main.temp_max,
        humidity_pct: parsed.main.humidity,
        wind_speed_mps: parsed.wind.speed,
    })
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}
