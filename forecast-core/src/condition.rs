use serde::{Deserialize, Serialize};

/// Display category derived from an Open-Meteo (WMO) weather code.
///
/// Classification is total: codes without a mapping become [`IconCategory::Unknown`],
/// so callers never have to handle a missing category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconCategory {
    Clear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    HeavyRain,
    Hail,
    Snow,
    Thunderstorm,
    #[default]
    Unknown,
}

impl IconCategory {
    pub const fn all() -> &'static [IconCategory] {
        &[
            IconCategory::Clear,
            IconCategory::PartlyCloudy,
            IconCategory::Cloudy,
            IconCategory::Fog,
            IconCategory::Drizzle,
            IconCategory::Rain,
            IconCategory::HeavyRain,
            IconCategory::Hail,
            IconCategory::Snow,
            IconCategory::Thunderstorm,
            IconCategory::Unknown,
        ]
    }

    /// Symbol name used by the mobile UI for this category.
    pub fn symbol_name(&self) -> &'static str {
        match self {
            IconCategory::Clear => "sun.max.fill",
            IconCategory::PartlyCloudy => "cloud.sun.fill",
            IconCategory::Cloudy => "cloud.fill",
            IconCategory::Fog => "cloud.fog.fill",
            IconCategory::Drizzle => "cloud.drizzle.fill",
            IconCategory::Rain => "cloud.rain.fill",
            IconCategory::HeavyRain => "cloud.heavyrain.fill",
            IconCategory::Hail => "cloud.hail.fill",
            IconCategory::Snow => "cloud.snow.fill",
            IconCategory::Thunderstorm => "cloud.bolt.fill",
            IconCategory::Unknown => "questionmark",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            IconCategory::Clear => "Clear",
            IconCategory::PartlyCloudy => "Partly cloudy",
            IconCategory::Cloudy => "Cloudy",
            IconCategory::Fog => "Fog",
            IconCategory::Drizzle => "Drizzle",
            IconCategory::Rain => "Rain",
            IconCategory::HeavyRain => "Heavy rain",
            IconCategory::Hail => "Hail",
            IconCategory::Snow => "Snow",
            IconCategory::Thunderstorm => "Thunderstorm",
            IconCategory::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for IconCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

impl From<i32> for IconCategory {
    fn from(code: i32) -> Self {
        classify(code)
    }
}

/// Map a provider weather code to its display category.
/// See: https://open-meteo.com/en/docs#weathervariables
pub fn classify(code: i32) -> IconCategory {
    match code {
        0 | 1 => IconCategory::Clear,
        2 => IconCategory::PartlyCloudy,
        3 => IconCategory::Cloudy,
        45 | 48 => IconCategory::Fog,
        51 | 53 => IconCategory::Drizzle,
        55 | 61 => IconCategory::Rain,
        63 | 65 | 80 | 81 | 82 => IconCategory::HeavyRain,
        // freezing drizzle / freezing rain
        56 | 57 | 66 | 67 => IconCategory::Hail,
        71 | 73 | 75 | 77 | 85 | 86 => IconCategory::Snow,
        95 | 96 | 99 => IconCategory::Thunderstorm,
        _ => IconCategory::Unknown,
    }
}
