use std::fmt;

use crate::error::{Result, WeatherError};

/// Environment variable consulted when no explicit key is given.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Resolved OpenWeatherMap API key. Never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Pick the explicit key if non-empty, else the environment value if non-empty.
    pub fn resolve(explicit: Option<&str>, env_value: Option<String>) -> Result<Self> {
        if let Some(key) = explicit.filter(|k| !k.is_empty()) {
            return Ok(Self(key.to_owned()));
        }

        match env_value {
            Some(key) if !key.is_empty() => Ok(Self(key)),
            _ => Err(WeatherError::Config(format!(
                "APIキーが設定されていません。環境変数{API_KEY_ENV}を設定するか、\
                 api_keyパラメータで指定してください。\n\
                 API key not set. Please set {API_KEY_ENV} environment variable \
                 or provide api_key parameter."
            ))),
        }
    }

    /// Same as [`ApiKey::resolve`], reading `OPENWEATHER_API_KEY` from the process environment.
    pub fn from_env(explicit: Option<&str>) -> Result<Self> {
        Self::resolve(explicit, std::env::var(API_KEY_ENV).ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
