use clap::{Args, Parser, Subcommand};
use tokyo_weather_core::{
    ReportStyle, TokyoWeatherClient, WeatherError, WeatherQuery, WeatherSource,
    model::DEFAULT_LANG,
};
use tracing::debug;

pub const USAGE_HINT: &str = "\n使用方法 (Usage):
1. OpenWeatherMapでAPIキーを取得: https://openweathermap.org/api
2. .envファイルを作成して以下を記載:
   OPENWEATHER_API_KEY=your_api_key_here";

/// What gets printed to stderr when `run` fails: the error itself, then the
/// usage hint if the failure was a missing API key.
///
/// Only the top-level message is shown; `WeatherError` already embeds its cause.
pub fn error_message(err: &anyhow::Error) -> String {
    let mut msg = format!("エラー (Error): {err}");

    if let Some(weather_err) = err.downcast_ref::<WeatherError>()
        && weather_err.is_config()
    {
        msg.push('\n');
        msg.push_str(USAGE_HINT);
    }

    msg
}

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "tokyo-weather", version, about = "Current weather in Tokyo")]
pub struct Cli {
    /// OpenWeatherMap API key; falls back to OPENWEATHER_API_KEY.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Unit system: metric, imperial or standard. Passed to the API as-is.
    #[arg(long, default_value = "metric")]
    pub units: String,

    /// Response language code, e.g. "ja" or "en".
    #[arg(long, default_value = DEFAULT_LANG)]
    pub lang: String,
}

impl QueryArgs {
    fn to_query(&self) -> WeatherQuery {
        WeatherQuery::new(self.units.as_str(), self.lang.as_str())
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the formatted weather report.
    Show {
        #[command(flatten)]
        query: QueryArgs,

        /// Decorate the report with colors and a weather symbol.
        #[arg(long)]
        styled: bool,
    },

    /// Print the raw JSON returned by OpenWeatherMap.
    Raw {
        #[command(flatten)]
        query: QueryArgs,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let client = TokyoWeatherClient::new(self.api_key.as_deref())?;

        match self.command {
            Command::Show { query, styled } => {
                let query = query.to_query();
                let style = if styled { ReportStyle::Styled } else { ReportStyle::Plain };

                let snapshot = client.current_weather(&query).await?;
                debug!(
                    location = ?snapshot.location_name,
                    observed_at = ?snapshot.observed_at,
                    "fetched snapshot"
                );

                println!(
                    "{}",
                    tokyo_weather_core::report::render(&snapshot, &query.units, style)
                );
            }
            Command::Raw { query } => {
                let value = client.current_weather_raw(&query.to_query()).await?;
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
        }

        Ok(())
    }
}
