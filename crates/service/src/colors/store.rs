use std::sync::Arc;

use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use tracing::{debug, info};

use super::domain::ColorSnapshot;
use super::repository::ColorRepository;
use super::COLOR_NOT_FOUND;
use crate::errors::ServiceError;

/// Beacon major -> hue mapping.
///
/// Readers load the current immutable snapshot without locking. Writers build
/// a new map from the current one and swap it in with read-copy-update, so
/// concurrent upserts never overwrite each other's keys. The slot stays empty
/// until the first upsert.
#[derive(Default)]
pub struct ColorSettingsStore {
    map: ArcSwapOption<ColorSnapshot>,
}

impl ColorSettingsStore {
    pub fn new() -> Self {
        Self { map: ArcSwapOption::empty() }
    }

    pub fn upsert(&self, major: i64, hue: i64) -> ColorSnapshot {
        let mut stored: Arc<ColorSnapshot> = Arc::default();
        let previous = self.map.rcu(|current| {
            let mut next = current.as_deref().cloned().unwrap_or_default();
            next.insert(major, hue);
            let next = Arc::new(next);
            stored = Arc::clone(&next);
            Some(next)
        });
        if previous.is_none() {
            info!(major, hue, "color mapping initialized");
        } else {
            debug!(major, hue, entries = stored.len(), "color upserted");
        }
        stored.as_ref().clone()
    }

    pub fn get(&self, major: i64) -> Result<i64, ServiceError> {
        self.map
            .load_full()
            .and_then(|m| m.get(&major).copied())
            .ok_or_else(|| ServiceError::not_found(COLOR_NOT_FOUND))
    }

    pub fn get_all(&self) -> Option<ColorSnapshot> {
        self.map.load_full().map(|m| m.as_ref().clone())
    }
}

#[async_trait]
impl ColorRepository for ColorSettingsStore {
    async fn upsert(&self, major: i64, hue: i64) -> ColorSnapshot {
        ColorSettingsStore::upsert(self, major, hue)
    }

    async fn get(&self, major: i64) -> Result<i64, ServiceError> {
        ColorSettingsStore::get(self, major)
    }

    async fn get_all(&self) -> Option<ColorSnapshot> {
        ColorSettingsStore::get_all(self)
    }
}
