use async_trait::async_trait;

use super::domain::Person;
use crate::errors::ServiceError;

/// Storage abstraction for person records, keyed by caller-assigned id.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// All records in insertion order.
    async fn list(&self) -> Vec<Person>;
    async fn get(&self, id: &str) -> Result<Person, ServiceError>;
    /// Append `payload` under `id` unless that id is taken; returns the full list.
    async fn create(&self, id: &str, payload: Person) -> Result<Vec<Person>, ServiceError>;
    /// Remove `id` if present; returns the full list either way.
    async fn delete(&self, id: &str) -> Vec<Person>;
}
