use crate::{
    WeatherQuery, WeatherSnapshot,
    error::Result,
    model::Units,
    provider::WeatherSource,
};

pub mod style;

use style::{BOLD, RESET, WeatherSymbol, temperature_color};

const RULE: &str = "========================================";
const TITLE: &str = "東京の天気情報 (Tokyo Weather Information)";

/// Whether the report is plain text or decorated with ANSI colors and symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportStyle {
    #[default]
    Plain,
    Styled,
}

pub fn unit_symbol(units: &Units) -> &'static str {
    match units {
        Units::Metric => "°C",
        Units::Imperial => "°F",
        _ => "K",
    }
}

/// Render a snapshot as the fixed-layout report.
pub fn render(snapshot: &WeatherSnapshot, units: &Units, style: ReportStyle) -> String {
    let unit = unit_symbol(units);
    let temp = |v: f64| format!("{}{unit}", reading(v));

    let (title, description, current) = match style {
        ReportStyle::Plain => (
            TITLE.to_string(),
            snapshot.description.clone(),
            temp(snapshot.temperature),
        ),
        ReportStyle::Styled => {
            let symbol = WeatherSymbol::classify(&snapshot.description).glyph();
            let color = temperature_color(snapshot.temperature, units);
            (
                format!("{BOLD}{symbol} {TITLE}{RESET}"),
                format!("{symbol} {}", snapshot.description),
                format!("{color}{}{RESET}", temp(snapshot.temperature)),
            )
        }
    };

    let report = format!(
        "
{RULE}
{title}
{RULE}
天気: {description}
気温: {current}
体感温度: {}
最低気温: {}
最高気温: {}
湿度: {}%
風速: {} m/s
{RULE}
",
        temp(snapshot.feels_like),
        temp(snapshot.temp_min),
        temp(snapshot.temp_max),
        snapshot.humidity_pct,
        reading(snapshot.wind_speed_mps),
    );

    report.trim().to_string()
}

/// Fetch the current weather from `source` and render it.
pub async fn fetch_report<S>(source: &S, query: &WeatherQuery, style: ReportStyle) -> Result<String>
where
    S: WeatherSource + ?Sized,
{
    let snapshot = source.current_weather(query).await?;
    Ok(render(&snapshot, &query.units, style))
}

/// Whole numbers keep one decimal (`25.0`), everything else prints as-is.
fn reading(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
