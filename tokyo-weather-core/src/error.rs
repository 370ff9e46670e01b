use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the Tokyo weather client.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// No API key could be resolved at construction time.
    #[error("{0}")]
    Config(String),

    /// Transport failure or non-success HTTP status.
    #[error("天気情報の取得に失敗しました (Failed to fetch weather information): {0}")]
    Network(#[source] reqwest::Error),

    /// The response body was not JSON or did not match the expected shape.
    #[error("天気情報の解析に失敗しました (Failed to parse weather information): {0}")]
    Decode(#[source] serde_json::Error),

    /// The response body was well-formed but lacked a required value.
    #[error("天気情報に必要な項目がありません (Weather response is missing `{0}`)")]
    MissingField(&'static str),
}

impl WeatherError {
    /// HTTP status of the failed request, if the server answered at all.
    ///
    /// Non-success statuses share the `Network` kind with transport failures;
    /// callers that care about 401 vs 429 vs 5xx can branch on this.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            WeatherError::Network(err) => err.status(),
            _ => None,
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, WeatherError::Config(_))
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        // The URL carries `appid`; keep it out of messages and logs.
        WeatherError::Network(err.without_url())
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::Decode(err)
    }
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;
