//! Demo records loaded at startup.

use crate::store::person::Person;

/// The seven records the service starts with when seeding is enabled.
pub fn demo_records() -> Vec<Person> {
    vec![
        Person::new("1", "Ryan", "Gosling").with_address("Los Angeles", "Etats-Unis"),
        Person::new("2", "Sébastien", "B"),
        Person::new("3", "Lucas", "B"),
        Person::new("4", "Cyril", "C"),
        Person::new("5", "Alex", "B"),
        Person::new("6", "Axel", "Prieur").with_address("Paris", "France"),
        Person::new("7", "Pascal", "S").with_address("Nice", "France"),
    ]
}
