use futures::{Stream, StreamExt};
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use tokio::sync::Mutex;
use tracing::debug;

use crate::{
    fetcher::{FetchError, WeatherFetcher},
    location::Coordinates,
    model::ForecastModel,
    store::ForecastStore,
};

/// Fetches forecasts and keeps the shared slot current.
///
/// Each refresh takes a sequence token before the request goes out; a result
/// that finishes after a newer one has been published is returned to its
/// caller but not stored. A failed refresh leaves the slot untouched.
#[derive(Debug)]
pub struct WeatherService {
    fetcher: WeatherFetcher,
    store: ForecastStore,
    sequence: AtomicU64,
}

impl WeatherService {
    pub fn new(fetcher: WeatherFetcher, store: ForecastStore) -> Self {
        Self { fetcher, store, sequence: AtomicU64::new(0) }
    }

    pub fn store(&self) -> &ForecastStore {
        &self.store
    }

    pub async fn refresh(&self, at: Coordinates) -> Result<Arc<ForecastModel>, FetchError> {
        let ticket = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(ticket, %at, "refreshing forecast");

        let model = Arc::new(self.fetcher.fetch(at.latitude, at.longitude).await?);
        self.store.publish(ticket, Arc::clone(&model));

        Ok(model)
    }

    /// Refresh for every position a location stream reports.
    ///
    /// A position repeating the last one that produced a forecast is skipped;
    /// after a failure the same position is fetched again. Every refresh
    /// outcome is yielded, failures included.
    pub fn follow<'a, S>(
        &'a self,
        updates: S,
    ) -> impl Stream<Item = Result<Arc<ForecastModel>, FetchError>> + 'a
    where
        S: Stream<Item = Coordinates> + 'a,
    {
        let last_fetched = Arc::new(Mutex::new(None::<Coordinates>));

        updates.filter_map(move |at| {
            let last_fetched = Arc::clone(&last_fetched);
            async move {
                let mut last = last_fetched.lock().await;
                if *last == Some(at) {
                    debug!(%at, "position unchanged, keeping forecast");
                    return None;
                }

                let result = self.refresh(at).await;
                if result.is_ok() {
                    *last = Some(at);
                }
                Some(result)
            }
        })
    }
}
