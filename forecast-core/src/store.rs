use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::model::ForecastModel;

/// One published forecast with the sequence token of the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub sequence: u64,
    pub model: Arc<ForecastModel>,
}

/// The single "current forecast" slot.
///
/// Readers get the whole model behind an `Arc`, never a half-updated one.
/// Clones share the same slot.
#[derive(Debug, Clone)]
pub struct ForecastStore {
    slot: Arc<watch::Sender<Option<Snapshot>>>,
}

impl Default for ForecastStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastStore {
    pub fn new() -> Self {
        let (slot, _) = watch::channel(None);
        Self { slot: Arc::new(slot) }
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        self.slot.borrow().clone()
    }

    pub fn current(&self) -> Option<Arc<ForecastModel>> {
        self.slot.borrow().as_ref().map(|s| Arc::clone(&s.model))
    }

    /// Receiver that wakes whenever a newer forecast is published.
    pub fn subscribe(&self) -> watch::Receiver<Option<Snapshot>> {
        self.slot.subscribe()
    }

    /// Replace the slot unless it already holds a forecast from a later request.
    /// Returns whether the model was stored.
    pub fn publish(&self, sequence: u64, model: Arc<ForecastModel>) -> bool {
        let stored = self.slot.send_if_modified(|slot| match slot {
            Some(held) if held.sequence > sequence => false,
            _ => {
                *slot = Some(Snapshot { sequence, model });
                true
            }
        });

        if stored {
            info!(sequence, "published forecast");
        } else {
            debug!(sequence, "dropped stale forecast");
        }
        stored
    }
}
