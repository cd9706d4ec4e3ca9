use futures::stream::{self, BoxStream, StreamExt};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoordinateError {
    #[error("Latitude {0} is outside -90..=90")]
    Latitude(f64),
    #[error("Longitude {0} is outside -180..=180")]
    Longitude(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::Latitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::Longitude(longitude));
        }
        Ok(Self { latitude, longitude })
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Something that reports where the user is.
///
/// `updates` yields a lazy, possibly endless sequence of positions, and the
/// same position may repeat. A finished stream is not restarted; call
/// `updates` again to re-subscribe.
pub trait LocationSource: Send + Sync {
    fn updates(&self) -> BoxStream<'static, Coordinates>;
}

/// A fixed position, e.g. a configured location or one given on the command line.
#[derive(Debug, Clone, Copy)]
pub struct StaticLocation(pub Coordinates);

impl LocationSource for StaticLocation {
    fn updates(&self) -> BoxStream<'static, Coordinates> {
        stream::iter([self.0]).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert_eq!(Coordinates::new(91.0, 0.0), Err(CoordinateError::Latitude(91.0)));
        assert_eq!(Coordinates::new(0.0, -180.5), Err(CoordinateError::Longitude(-180.5)));
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn keeps_sign_of_southern_and_western_positions() {
        let c = Coordinates::new(-33.87, -151.2).unwrap();
        assert_eq!(c.latitude, -33.87);
        assert_eq!(c.longitude, -151.2);
    }

    #[tokio::test]
    async fn static_location_yields_once_per_subscription() {
        let source = StaticLocation(Coordinates::new(1.0, 2.0).unwrap());

        let first: Vec<_> = source.updates().collect().await;
        let second: Vec<_> = source.updates().collect().await;

        assert_eq!(first, vec![source.0]);
        assert_eq!(second, vec![source.0]);
    }
}
