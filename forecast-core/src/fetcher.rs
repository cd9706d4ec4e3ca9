use reqwest::Url;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    config::Config,
    model::{ForecastModel, ParseError, parse},
    transport::{HttpTransport, Transport, TransportError},
};

const CURRENT_FIELDS: &str = "temperature_2m,weather_code";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("No forecast data received: {0}")]
    NoData(#[from] TransportError),

    #[error("Forecast data could not be decoded: {0}")]
    Decode(#[from] ParseError),
}

/// Issues one forecast request per call.
///
/// Calls are independent; overlapping fetches are not serialized here.
#[derive(Debug, Clone)]
pub struct WeatherFetcher {
    transport: Arc<dyn Transport>,
    endpoint: Url,
    timezone: String,
}

impl WeatherFetcher {
    pub fn new(transport: Arc<dyn Transport>, endpoint: Url, timezone: impl Into<String>) -> Self {
        Self { transport, endpoint, timezone: timezone.into() }
    }

    /// Fetcher over HTTP using the endpoint and timezone from config.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(Arc::new(HttpTransport::new()), config.endpoint_url()?, &config.timezone))
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn request_url(&self, latitude: f64, longitude: f64) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("latitude", &latitude.to_string())
            .append_pair("longitude", &longitude.to_string())
            .append_pair("current", CURRENT_FIELDS)
            .append_pair("daily", DAILY_FIELDS)
            .append_pair("timezone", &self.timezone);
        url
    }

    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Result<ForecastModel, FetchError> {
        let url = self.request_url(latitude, longitude);

        let body = match self.transport.get(&url).await {
            Ok(body) if body.is_empty() => Err(TransportError::Empty),
            other => other,
        }
        .inspect_err(|err| warn!(latitude, longitude, error = %err, "forecast request failed"))?;

        debug!(bytes = body.len(), "forecast response received");

        parse(&body)
            .inspect_err(|err| warn!(latitude, longitude, error = %err, "forecast decode failed"))
            .map_err(FetchError::from)
    }
}
