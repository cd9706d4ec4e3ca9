use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::PathBuf};

use crate::location::{CoordinateError, Coordinates};

pub const DEFAULT_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_TIMEZONE: &str = "Australia/Sydney";

/// A named place the user can ask the forecast for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavedLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl SavedLocation {
    pub fn coordinates(&self) -> Result<Coordinates, CoordinateError> {
        Coordinates::new(self.latitude, self.longitude)
    }
}

impl From<Coordinates> for SavedLocation {
    fn from(c: Coordinates) -> Self {
        Self { latitude: c.latitude, longitude: c.longitude }
    }
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Forecast endpoint, Open-Meteo by default.
    pub endpoint: String,

    /// Timezone the provider uses for daily boundaries.
    pub timezone: String,

    /// Name of the location `show` uses when none is given.
    pub default_location: Option<String>,

    /// Example TOML:
    /// [locations.sydney]
    /// latitude = -33.87
    /// longitude = 151.21
    pub locations: HashMap<String, SavedLocation>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            default_location: None,
            locations: HashMap::new(),
        }
    }
}

impl Config {
    pub fn endpoint_url(&self) -> Result<Url> {
        self.endpoint
            .parse()
            .with_context(|| format!("Invalid forecast endpoint in config: {}", self.endpoint))
    }

    /// Resolve a location by name, falling back to the default one.
    pub fn resolve_location(&self, name: Option<&str>) -> Result<(String, Coordinates)> {
        let name = match name {
            Some(name) => name,
            None => self.default_location.as_deref().ok_or_else(|| {
                anyhow!(
                    "No default location configured.\n\
                     Hint: run `forecast configure <name>` (e.g. `forecast configure sydney`) first."
                )
            })?,
        };

        let saved = self.locations.get(name).ok_or_else(|| {
            anyhow!(
                "Unknown location '{name}'.\n\
                 Hint: run `forecast configure {name}` to add it."
            )
        })?;

        let coordinates = saved
            .coordinates()
            .with_context(|| format!("Location '{name}' has invalid coordinates"))?;

        Ok((name.to_string(), coordinates))
    }

    pub fn set_default_location(&mut self, name: &str) -> Result<()> {
        if !self.locations.contains_key(name) {
            return Err(anyhow!("Cannot make unknown location '{name}' the default"));
        }
        self.default_location = Some(name.to_string());
        Ok(())
    }

    /// Set/replace a location; the first one stored becomes the default.
    pub fn upsert_location(&mut self, name: &str, coordinates: Coordinates) {
        self.locations.insert(name.to_string(), coordinates.into());

        if self.default_location.is_none() {
            self.default_location = Some(name.to_string());
        }
    }

    /// Load config from disk, or return the defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
