use std::sync::{Arc, RwLock};

use crate::core::Matcher;
use crate::error::RankerError;
use crate::models::Dataset;

/// One load of both documents and when it finished
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub dataset: Arc<Dataset>,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

impl Snapshot {
    fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            loaded_at: chrono::Utc::now(),
        }
    }
}

/// In-memory snapshot of both source documents with explicit reload.
///
/// Readers get a cheap `Arc` clone of the current dataset; `refresh`
/// swaps in a fresh load and leaves the old snapshot in place on failure.
/// Dataset and timestamp are replaced together under one lock.
pub struct SnapshotStore {
    matcher: Matcher,
    current: RwLock<Snapshot>,
}

impl SnapshotStore {
    /// Load the initial snapshot
    pub fn load(matcher: Matcher) -> Result<Self, RankerError> {
        let snapshot = Snapshot::new(matcher.load_dataset()?);
        tracing::info!(
            "Snapshot loaded: {} employers, {} candidates",
            snapshot.dataset.employers.len(),
            snapshot.dataset.candidates.len()
        );

        Ok(Self {
            matcher,
            current: RwLock::new(snapshot),
        })
    }

    /// Dataset currently being served
    pub fn current(&self) -> Arc<Dataset> {
        self.snapshot().dataset
    }

    /// Dataset currently being served, with its load time
    pub fn snapshot(&self) -> Snapshot {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Reload both documents and replace the snapshot.
    ///
    /// Returns the snapshot being served afterwards. A load that finished
    /// before the one already installed does not replace it.
    pub fn refresh(&self) -> Result<Snapshot, RankerError> {
        let fresh = match self.matcher.load_dataset() {
            Ok(dataset) => Snapshot::new(dataset),
            Err(e) => {
                tracing::warn!("Snapshot refresh failed, keeping previous data: {}", e);
                return Err(e);
            }
        };

        let mut current = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if fresh.loaded_at < current.loaded_at {
            tracing::debug!("Discarding refresh superseded by a newer snapshot");
            return Ok(current.clone());
        }
        *current = fresh.clone();
        drop(current);

        tracing::info!(
            "Snapshot refreshed: {} employers, {} candidates",
            fresh.dataset.employers.len(),
            fresh.dataset.candidates.len()
        );
        Ok(fresh)
    }
}
