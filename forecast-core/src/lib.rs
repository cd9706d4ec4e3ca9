//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Classification of provider weather codes into icon categories
//! - Weekday labels for forecast dates
//! - The Open-Meteo forecast model and the day queries over it
//! - Fetching forecasts over HTTP and keeping the latest one in a shared slot
//! - Configuration & saved locations
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod condition;
pub mod config;
pub mod fetcher;
pub mod label;
pub mod location;
pub mod model;
pub mod query;
pub mod service;
pub mod store;
pub mod transport;

pub use condition::{IconCategory, classify};
pub use config::{Config, SavedLocation};
pub use fetcher::{FetchError, WeatherFetcher};
pub use label::label;
pub use location::{Coordinates, LocationSource, StaticLocation};
pub use model::{ForecastDay, ForecastModel, ParseError, parse};
pub use service::WeatherService;
pub use store::{ForecastStore, Snapshot};
pub use transport::{HttpTransport, Transport, TransportError};
