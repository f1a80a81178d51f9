use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::domain::Person;
use super::repository::PersonRepository;
use super::{PERSON_ALREADY_EXISTS, PERSON_NOT_FOUND};
use crate::errors::ServiceError;

/// Ordered, unique-by-id collection of people.
///
/// Reads share the lock; every mutation (including the duplicate check that
/// precedes an insert) runs under a single write-lock acquisition.
#[derive(Default)]
pub struct PersonStore {
    inner: RwLock<Vec<Person>>,
}

impl PersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from `people`, keeping the first record for any repeated id.
    pub fn with_people(people: Vec<Person>) -> Self {
        let mut unique: Vec<Person> = Vec::with_capacity(people.len());
        for p in people {
            if !unique.iter().any(|u| u.id == p.id) {
                unique.push(p);
            }
        }
        Self { inner: RwLock::new(unique) }
    }

    pub async fn list(&self) -> Vec<Person> {
        self.inner.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Result<Person, ServiceError> {
        let people = self.inner.read().await;
        people
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(PERSON_NOT_FOUND))
    }

    pub async fn create(&self, id: &str, payload: Person) -> Result<Vec<Person>, ServiceError> {
        let mut people = self.inner.write().await;
        if people.iter().any(|p| p.id == id) {
            debug!(person_id = %id, "create rejected: id already present");
            return Err(ServiceError::already_exists(PERSON_ALREADY_EXISTS));
        }
        people.push(payload.with_id(id));
        info!(person_id = %id, total = people.len(), "person created");
        Ok(people.clone())
    }

    pub async fn delete(&self, id: &str) -> Vec<Person> {
        let mut people = self.inner.write().await;
        match people.iter().position(|p| p.id == id) {
            Some(idx) => {
                people.remove(idx);
                info!(person_id = %id, total = people.len(), "person deleted");
            }
            None => debug!(person_id = %id, "delete of unknown id ignored"),
        }
        people.clone()
    }
}

#[async_trait]
impl PersonRepository for PersonStore {
    async fn list(&self) -> Vec<Person> {
        PersonStore::list(self).await
    }

    async fn get(&self, id: &str) -> Result<Person, ServiceError> {
        PersonStore::get(self, id).await
    }

    async fn create(&self, id: &str, payload: Person) -> Result<Vec<Person>, ServiceError> {
        PersonStore::create(self, id, payload).await
    }

    async fn delete(&self, id: &str) -> Vec<Person> {
        PersonStore::delete(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::people::seed::example_people;

    fn named(first: &str) -> Person {
        Person { first: first.into(), ..Default::default() }
    }

    #[tokio::test]
    async fn distinct_creates_are_listed_and_retrievable() -> anyhow::Result<()> {
        let store = PersonStore::new();
        for (id, name) in [("a", "Ada"), ("b", "Bob"), ("c", "Cy")] {
            store.create(id, named(name)).await?;
        }

        let listed = store.list().await;
        let ids: Vec<&str> = listed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        for (id, name) in [("a", "Ada"), ("b", "Bob"), ("c", "Cy")] {
            let p = store.get(id).await?;
            assert_eq!(p.id, id);
            assert_eq!(p.first, name);
        }
        Ok(())
    }

    #[tokio::test]
    async fn create_returns_full_list_and_path_id_wins() -> anyhow::Result<()> {
        let store = PersonStore::with_people(example_people());
        let payload = Person { id: "ignored".into(), first: "Ada".into(), ..Default::default() };
        let after = store.create("3", payload).await?;

        assert_eq!(after.len(), 3);
        assert_eq!(after[2], Person { id: "3".into(), first: "Ada".into(), ..Default::default() });
        assert!(store.get("ignored").await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_create_leaves_store_unchanged() -> anyhow::Result<()> {
        let store = PersonStore::with_people(example_people());
        store.create("3", named("Ada")).await?;
        let before = store.list().await;

        let err = store.create("3", named("Eve")).await.unwrap_err();
        assert_eq!(err, ServiceError::AlreadyExists(PERSON_ALREADY_EXISTS.into()));
        assert_eq!(store.list().await, before);
        assert_eq!(store.get("3").await?.first, "Ada");
        Ok(())
    }

    #[tokio::test]
    async fn zero_valued_payload_is_stored_with_id() -> anyhow::Result<()> {
        let store = PersonStore::new();
        let after = store.create("z", Person::default()).await?;
        assert_eq!(after, vec![Person { id: "z".into(), ..Default::default() }]);
        Ok(())
    }

    #[tokio::test]
    async fn delete_unknown_id_is_noop() {
        let store = PersonStore::with_people(example_people());
        let before = store.list().await;
        let after = store.delete("missing").await;
        assert_eq!(after, before);
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn delete_preserves_order_and_then_get_is_not_found() -> anyhow::Result<()> {
        let store = PersonStore::new();
        for id in ["a", "b", "c"] {
            store.create(id, Person::default()).await?;
        }

        let after = store.delete("b").await;
        let ids: Vec<&str> = after.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(store.get("b").await, Err(ServiceError::NotFound(PERSON_NOT_FOUND.into())));
        Ok(())
    }

    #[tokio::test]
    async fn deleted_id_can_be_created_again() -> anyhow::Result<()> {
        let store = PersonStore::with_people(example_people());
        store.delete("1").await;
        let after = store.create("1", named("Again")).await?;
        assert_eq!(after.last().map(|p| p.first.as_str()), Some("Again"));
        Ok(())
    }

    #[test]
    fn with_people_keeps_first_of_repeated_ids() {
        let store = PersonStore::with_people(vec![
            Person { id: "x".into(), first: "one".into(), ..Default::default() },
            Person { id: "x".into(), first: "two".into(), ..Default::default() },
        ]);
        let people = store.inner.try_read().expect("uncontended").clone();
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].first, "one");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn racing_creates_for_one_id_admit_exactly_one() {
        let store = Arc::new(PersonStore::new());
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.create("same", named(&format!("writer-{i}"))).await.is_ok()
            }));
        }

        let mut wins = 0;
        for h in handles {
            if h.await.expect("join") {
                wins += 1;
            }
        }
        assert_eq!(wins, 1);
        assert_eq!(store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn repository_trait_object_delegates() -> anyhow::Result<()> {
        let repo: Arc<dyn PersonRepository> = Arc::new(PersonStore::new());
        repo.create("t", named("Trait")).await?;
        assert_eq!(repo.get("t").await?.first, "Trait");
        assert_eq!(repo.list().await.len(), 1);
        assert!(repo.delete("t").await.is_empty());
        Ok(())
    }
}
