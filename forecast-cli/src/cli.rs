use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use futures::StreamExt;
use inquire::CustomType;
use tracing::info;

use forecast_core::{
    Config, Coordinates, ForecastStore, LocationSource, StaticLocation, WeatherFetcher,
    WeatherService,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Current conditions and five-day forecast")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Save a named location. Prompts for coordinates that aren't given.
    Configure {
        /// Location name, e.g. "sydney".
        name: String,

        #[arg(long, allow_negative_numbers = true)]
        latitude: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        longitude: Option<f64>,

        /// Make this the location `show` uses by default.
        #[arg(long)]
        default: bool,
    },

    /// Show the forecast for a saved location or explicit coordinates.
    Show {
        /// Saved location name; the default location if absent.
        name: Option<String>,

        #[arg(long, allow_negative_numbers = true, requires = "longitude")]
        latitude: Option<f64>,

        #[arg(long, allow_negative_numbers = true, requires = "latitude")]
        longitude: Option<f64>,

        /// Override the configured timezone, e.g. "Europe/Berlin".
        #[arg(long)]
        timezone: Option<String>,
    },

    /// List saved locations.
    Locations,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure { name, latitude, longitude, default } => {
                configure(&name, latitude, longitude, default)
            }
            Command::Show { name, latitude, longitude, timezone } => {
                show(name, latitude.zip(longitude), timezone).await
            }
            Command::Locations => {
                let config = Config::load()?;
                print!("{}", render::locations(&config));
                Ok(())
            }
        }
    }
}

fn configure(name: &str, latitude: Option<f64>, longitude: Option<f64>, default: bool) -> Result<()> {
    let mut config = Config::load()?;

    let latitude = match latitude {
        Some(v) => v,
        None => prompt_degrees("Latitude:")?,
    };
    let longitude = match longitude {
        Some(v) => v,
        None => prompt_degrees("Longitude:")?,
    };
    let coordinates = Coordinates::new(latitude, longitude)?;

    config.upsert_location(name, coordinates);
    if default {
        config.set_default_location(name)?;
    }
    config.save()?;

    info!(location = name, %coordinates, "saved location");
    println!("Saved '{name}' at {coordinates}.");
    Ok(())
}

fn prompt_degrees(message: &str) -> Result<f64> {
    CustomType::<f64>::new(message)
        .with_error_message("Please enter a number of degrees, e.g. -33.87")
        .prompt()
        .context("Failed to read coordinates")
}

async fn show(
    name: Option<String>,
    explicit: Option<(f64, f64)>,
    timezone: Option<String>,
) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(tz) = timezone {
        config.timezone = tz;
    }

    let (place, coordinates) = match explicit {
        Some((latitude, longitude)) => {
            let coordinates = Coordinates::new(latitude, longitude)?;
            (name.unwrap_or_else(|| coordinates.to_string()), coordinates)
        }
        None => config.resolve_location(name.as_deref())?,
    };

    let service = WeatherService::new(WeatherFetcher::from_config(&config)?, ForecastStore::new());
    let source = StaticLocation(coordinates);

    let mut outcomes = Box::pin(service.follow(source.updates()));
    while let Some(outcome) = outcomes.next().await {
        outcome.with_context(|| format!("Could not get a forecast for {place}"))?;
    }

    let model = service
        .store()
        .current()
        .ok_or_else(|| anyhow!("No forecast available for {place}"))?;

    print!("{}", render::forecast(&place, &model));
    Ok(())
}
