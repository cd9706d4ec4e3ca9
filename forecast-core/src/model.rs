use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{condition::IconCategory, label::UNKNOWN_LABEL};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Malformed forecast payload: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// One Open-Meteo forecast response.
///
/// Field names follow the provider's JSON; only `latitude`, `longitude`,
/// `timezone`, `current` and `daily` are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastModel {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub timezone_abbreviation: Option<String>,
    pub generationtime_ms: Option<f64>,
    pub utc_offset_seconds: Option<i32>,
    pub elevation: Option<f64>,
    pub current_units: Option<CurrentUnits>,
    pub current: Current,
    pub daily_units: Option<DailyUnits>,
    pub daily: Daily,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Current {
    #[serde(rename = "time")]
    pub timestamp: String,
    pub interval: Option<u32>,
    #[serde(rename = "temperature_2m")]
    pub temperature: f64,
    pub weather_code: i32,
}

/// Parallel per-day sequences; index 0 is today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Daily {
    #[serde(rename = "time")]
    pub dates: Vec<String>,
    #[serde(rename = "weather_code")]
    pub weather_codes: Vec<i32>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Vec<f64>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Vec<f64>,
}

impl Daily {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUnits {
    pub time: Option<String>,
    pub interval: Option<String>,
    pub temperature_2m: Option<String>,
    pub weather_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyUnits {
    pub time: Option<String>,
    pub weather_code: Option<String>,
    pub temperature_2m_max: Option<String>,
    pub temperature_2m_min: Option<String>,
}

/// Decode a raw provider response.
pub fn parse(raw: &[u8]) -> Result<ForecastModel, ParseError> {
    let model: ForecastModel = serde_json::from_slice(raw).map_err(ParseError::Malformed)?;

    debug!(
        latitude = model.latitude,
        longitude = model.longitude,
        days = model.daily.len(),
        "parsed forecast"
    );

    Ok(model)
}

impl TryFrom<&[u8]> for ForecastModel {
    type Error = ParseError;

    fn try_from(raw: &[u8]) -> Result<Self, Self::Error> {
        parse(raw)
    }
}

/// Display-ready record for one day slot. Built on demand from a [`ForecastModel`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    pub label: String,
    pub temperature_high: Option<f64>,
    pub temperature_low: Option<f64>,
    /// Only set for the current-conditions day.
    pub current_temperature: Option<f64>,
    pub category: IconCategory,
}

impl ForecastDay {
    /// Stand-in for a slot with no data: "???", zero temperatures, unknown icon.
    pub fn placeholder() -> Self {
        Self {
            label: UNKNOWN_LABEL.to_string(),
            temperature_high: Some(0.0),
            temperature_low: Some(0.0),
            current_temperature: Some(0.0),
            category: IconCategory::Unknown,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }

    pub fn average_temperature(&self) -> Option<f64> {
        match (self.temperature_high, self.temperature_low) {
            (Some(high), Some(low)) => Some((high + low) / 2.0),
            _ => None,
        }
    }
}

impl Default for ForecastDay {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const FIXTURE: &str = include_str!("../tests/fixtures/forecast.json");

    pub(crate) fn fixture() -> ForecastModel {
        parse(FIXTURE.as_bytes()).expect("fixture must parse")
    }

    #[test]
    fn parses_full_payload() {
        let model = fixture();

        assert_eq!(model.timezone, "Australia/Sydney");
        assert_eq!(model.timezone_abbreviation.as_deref(), Some("AEDT"));
        assert_eq!(model.current.weather_code, 0);
        assert_eq!(model.current.temperature, 24.3);
        assert_eq!(model.daily.len(), 5);
        assert_eq!(model.daily.dates[0], "2023-11-29");
        assert_eq!(model.daily.temperature_max[2], 19.8);
        assert_eq!(
            model.daily_units.and_then(|u| u.temperature_2m_max).as_deref(),
            Some("°C")
        );
    }

    #[test]
    fn parses_minimal_payload_without_metadata() {
        let raw = br#"{
            "latitude": 1.5,
            "longitude": -2.5,
            "timezone": "UTC",
            "current": { "time": "2024-01-01T00:00", "temperature_2m": 3.0, "weather_code": 2 },
            "daily": {
                "time": [],
                "weather_code": [],
                "temperature_2m_max": [],
                "temperature_2m_min": []
            }
        }"#;

        let model = parse(raw).expect("minimal payload must parse");
        assert!(model.daily.is_empty());
        assert!(model.current_units.is_none());
        assert_eq!(model.current.interval, None);
    }

    #[test]
    fn partial_unit_blocks_still_parse() {
        let mut value: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
        value["current_units"].as_object_mut().unwrap().remove("interval");
        value["daily_units"] = serde_json::json!({ "time": "iso8601" });
        let raw = serde_json::to_vec(&value).unwrap();

        let model = parse(&raw).expect("unit metadata is optional");
        let current_units = model.current_units.unwrap();
        assert_eq!(current_units.interval, None);
        assert_eq!(current_units.temperature_2m.as_deref(), Some("°C"));
        assert_eq!(model.daily_units.unwrap().temperature_2m_min, None);
    }

    #[test]
    fn missing_daily_weather_code_is_malformed() {
        let mut value: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
        value["daily"].as_object_mut().unwrap().remove("weather_code");
        let raw = serde_json::to_vec(&value).unwrap();

        let err = parse(&raw).unwrap_err();
        assert!(matches!(err, ParseError::Malformed(_)));
        assert!(err.to_string().contains("weather_code"));
    }

    #[test]
    fn null_daily_array_is_malformed() {
        let mut value: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
        value["daily"]["temperature_2m_min"] = serde_json::Value::Null;
        let raw = serde_json::to_vec(&value).unwrap();

        assert!(matches!(parse(&raw), Err(ParseError::Malformed(_))));
    }

    #[test]
    fn non_json_is_malformed() {
        assert!(matches!(parse(b"<html>"), Err(ParseError::Malformed(_))));
        assert!(matches!(parse(b""), Err(ParseError::Malformed(_))));
    }

    #[test]
    fn parsing_twice_gives_equal_models() {
        let first = parse(FIXTURE.as_bytes()).unwrap();
        let second = ForecastModel::try_from(FIXTURE.as_bytes()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn placeholder_day_defaults() {
        let day = ForecastDay::default();

        assert_eq!(day.label, "???");
        assert_eq!(day.category, IconCategory::Unknown);
        assert_eq!(day.temperature_high, Some(0.0));
        assert!(day.is_placeholder());
    }

    #[test]
    fn average_needs_both_bounds() {
        let mut day = ForecastDay {
            label: "Mon".into(),
            temperature_high: Some(20.0),
            temperature_low: Some(11.0),
            current_temperature: None,
            category: IconCategory::Clear,
        };
        assert_eq!(day.average_temperature(), Some(15.5));

        day.temperature_low = None;
        assert_eq!(day.average_temperature(), None);
    }
}
