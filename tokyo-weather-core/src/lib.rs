//! Core library for the `tokyo-weather` CLI.
//!
//! This crate defines:
//! - API key resolution (explicit value or `OPENWEATHER_API_KEY`)
//! - The OpenWeatherMap client pinned to Tokyo's coordinates
//! - The typed weather snapshot and the text report rendered from it
//!
//! It is used by `tokyo-weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod report;

pub use config::{API_KEY_ENV, ApiKey};
pub use error::WeatherError;
pub use model::{TOKYO, Units, WeatherQuery, WeatherSnapshot};
pub use provider::{WeatherSource, openweather::TokyoWeatherClient};
pub use report::ReportStyle;
