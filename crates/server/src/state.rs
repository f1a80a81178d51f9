use std::sync::Arc;

use axum::http::StatusCode;
use configs::ApiConfig;
use service::colors::{ColorRepository, ColorSettingsStore};
use service::people::{seed::example_people, PersonRepository, PersonStore};

/// Shared router state: one handle per store plus response policy.
#[derive(Clone)]
pub struct AppState {
    pub people: Arc<dyn PersonRepository>,
    pub colors: Arc<dyn ColorRepository>,
    pub strict_not_found: bool,
}

impl AppState {
    pub fn new(
        people: Arc<dyn PersonRepository>,
        colors: Arc<dyn ColorRepository>,
        strict_not_found: bool,
    ) -> Self {
        Self { people, colors, strict_not_found }
    }

    pub fn from_config(api: &ApiConfig) -> Self {
        let people = if api.seed_people {
            PersonStore::with_people(example_people())
        } else {
            PersonStore::new()
        };
        Self::new(Arc::new(people), Arc::new(ColorSettingsStore::new()), api.strict_not_found)
    }

    /// Status used when a person or color lookup misses.
    pub fn not_found_status(&self) -> StatusCode {
        if self.strict_not_found {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::OK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_status_follows_policy() {
        let mut api = ApiConfig::default();
        assert_eq!(AppState::from_config(&api).not_found_status(), StatusCode::NOT_FOUND);
        api.strict_not_found = false;
        assert_eq!(AppState::from_config(&api).not_found_status(), StatusCode::OK);
    }
}
