use async_trait::async_trait;

use super::domain::ColorSnapshot;
use crate::errors::ServiceError;

/// Storage abstraction for beacon color settings.
#[async_trait]
pub trait ColorRepository: Send + Sync {
    /// Set (or replace) the hue for `major`; returns the resulting snapshot.
    async fn upsert(&self, major: i64, hue: i64) -> ColorSnapshot;
    async fn get(&self, major: i64) -> Result<i64, ServiceError>;
    /// `None` until the first upsert.
    async fn get_all(&self) -> Option<ColorSnapshot>;
}
