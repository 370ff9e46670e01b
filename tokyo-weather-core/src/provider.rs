use std::fmt::Debug;

use async_trait::async_trait;
use serde_json::Value;

use crate::{WeatherQuery, WeatherSnapshot, error::Result};

pub mod openweather;

/// Something that can answer "what is the weather in Tokyo right now".
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    /// Decoded response body, returned verbatim.
    async fn current_weather_raw(&self, query: &WeatherQuery) -> Result<Value>;

    /// Typed snapshot built from [`WeatherSource::current_weather_raw`].
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherSnapshot> {
        let raw = self.current_weather_raw(query).await?;
        let snapshot = openweather::parse_current(raw)?;
        tracing::debug!(?snapshot, "decoded current weather");
        Ok(snapshot)
    }
}
