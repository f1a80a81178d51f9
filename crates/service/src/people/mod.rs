//! People: domain, repository abstraction and the lock-guarded store.

pub mod domain;
pub mod repository;
pub mod seed;
pub mod store;

pub use domain::{Address, Person};
pub use repository::PersonRepository;
pub use store::PersonStore;

pub const PERSON_NOT_FOUND: &str = "Person not found";
pub const PERSON_ALREADY_EXISTS: &str = "Person with ID already exists";
