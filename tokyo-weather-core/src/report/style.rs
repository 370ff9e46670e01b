//! Presentational annotations for the styled report: a weather symbol picked
//! from the description and a color picked from the temperature.

use crate::model::Units;

pub const RESET: &str = "\u{1b}[0m";
pub const BOLD: &str = "\u{1b}[1m";
/// Used for every non-metric reading.
pub const NEUTRAL: &str = "\u{1b}[37m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherSymbol {
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunder,
    Fog,
    PartlyCloudy,
}

// Checked in order; first hit wins.
const KEYWORDS: &[(WeatherSymbol, &[&str])] = &[
    (WeatherSymbol::Clear, &["clear", "sunny", "晴"]),
    (WeatherSymbol::Clouds, &["cloud", "曇", "雲"]),
    (WeatherSymbol::Rain, &["rain", "drizzle", "雨"]),
    (WeatherSymbol::Snow, &["snow", "雪"]),
    (WeatherSymbol::Thunder, &["thunder", "storm", "雷"]),
    (WeatherSymbol::Fog, &["fog", "mist", "haze", "霧", "靄"]),
];

impl WeatherSymbol {
    pub fn classify(description: &str) -> Self {
        let lower = description.to_lowercase();

        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
            .map(|(symbol, _)| *symbol)
            .unwrap_or(WeatherSymbol::PartlyCloudy)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            WeatherSymbol::Clear => "☀️",
            WeatherSymbol::Clouds => "☁️",
            WeatherSymbol::Rain => "🌧️",
            WeatherSymbol::Snow => "❄️",
            WeatherSymbol::Thunder => "⚡",
            WeatherSymbol::Fog => "🌫️",
            WeatherSymbol::PartlyCloudy => "⛅",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    Hot,
    Warm,
    Comfortable,
    Cool,
    Cold,
}

impl TemperatureBand {
    /// Bands are inclusive lower bounds in °C.
    pub fn classify(celsius: f64) -> Self {
        if celsius >= 30.0 {
            TemperatureBand::Hot
        } else if celsius >= 25.0 {
            TemperatureBand::Warm
        } else if celsius >= 15.0 {
            TemperatureBand::Comfortable
        } else if celsius >= 5.0 {
            TemperatureBand::Cool
        } else {
            TemperatureBand::Cold
        }
    }

    /// Only metric readings are banded; other unit systems get [`NEUTRAL`].
    pub fn for_reading(temp: f64, units: &Units) -> Option<Self> {
        match units {
            Units::Metric => Some(Self::classify(temp)),
            _ => None,
        }
    }

    pub fn ansi(self) -> &'static str {
        match self {
            TemperatureBand::Hot => "\u{1b}[31m",
            TemperatureBand::Warm => "\u{1b}[33m",
            TemperatureBand::Comfortable => "\u{1b}[32m",
            TemperatureBand::Cool => "\u{1b}[36m",
            TemperatureBand::Cold => "\u{1b}[34m",
        }
    }
}

/// ANSI color for the current temperature.
pub fn temperature_color(temp: f64, units: &Units) -> &'static str {
    TemperatureBand::for_reading(temp, units).map_or(NEUTRAL, TemperatureBand::ansi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rain_keywords_in_any_case_or_script() {
        assert_eq!(WeatherSymbol::classify("小雨"), WeatherSymbol::Rain);
        assert_eq!(WeatherSymbol::classify("Light RAIN"), WeatherSymbol::Rain);
        assert_eq!(WeatherSymbol::classify("drizzle"), WeatherSymbol::Rain);
    }

    #[test]
    fn unknown_description_falls_back() {
        assert_eq!(WeatherSymbol::classify("tornado"), WeatherSymbol::PartlyCloudy);
        assert_eq!(WeatherSymbol::classify(""), WeatherSymbol::PartlyCloudy);
        assert_eq!(WeatherSymbol::PartlyCloudy.glyph(), "⛅");
    }

    #[test]
    fn first_matching_group_wins() {
        assert_eq!(WeatherSymbol::classify("Clear sky"), WeatherSymbol::Clear);
        assert_eq!(WeatherSymbol::classify("broken clouds"), WeatherSymbol::Clouds);
        // rain is checked before thunder
        assert_eq!(WeatherSymbol::classify("thunderstorm with rain"), WeatherSymbol::Rain);
        assert_eq!(WeatherSymbol::classify("雷雨"), WeatherSymbol::Rain);
        assert_eq!(WeatherSymbol::classify("thunderstorm"), WeatherSymbol::Thunder);
        assert_eq!(WeatherSymbol::classify("snow"), WeatherSymbol::Snow);
        assert_eq!(WeatherSymbol::classify("Haze"), WeatherSymbol::Fog);
    }

    #[test]
    fn band_boundaries_are_inclusive() {
        assert_eq!(TemperatureBand::classify(30.0), TemperatureBand::Hot);
        assert_eq!(TemperatureBand::classify(29.9), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::classify(25.0), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::classify(15.0), TemperatureBand::Comfortable);
        assert_eq!(TemperatureBand::classify(5.0), TemperatureBand::Cool);
        assert_eq!(TemperatureBand::classify(4.9), TemperatureBand::Cold);
        assert_eq!(TemperatureBand::classify(-10.0), TemperatureBand::Cold);
    }

    #[test]
    fn non_metric_gets_neutral_color() {
        assert_eq!(TemperatureBand::for_reading(100.0, &Units::Imperial), None);
        assert_eq!(temperature_color(100.0, &Units::Imperial), NEUTRAL);
        assert_eq!(temperature_color(300.0, &Units::Standard), NEUTRAL);
        assert_eq!(temperature_color(31.0, &Units::Metric), TemperatureBand::Hot.ansi());
    }
}
