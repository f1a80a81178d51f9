use super::domain::{Address, Person};

/// Records the server starts with when seeding is enabled.
pub fn example_people() -> Vec<Person> {
    vec![
        Person {
            id: "1".into(),
            first: "Koushik".into(),
            last: "KASHOJJULA".into(),
            address: Some(Address { city: "Charlotte".into(), state: "NC".into() }),
        },
        Person {
            id: "2".into(),
            first: "Kittu".into(),
            last: "K".into(),
            address: None,
        },
    ]
}
