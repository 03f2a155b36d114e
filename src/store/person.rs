//! Person records and their JSON shape.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A person held in the store.
///
/// Empty fields are omitted when serialized, so a default `Person`
/// renders as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Client-assigned identifier, taken from the URL path.
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,

    /// Given name.
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub prenom: String,

    /// Family name.
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub nom: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresse: Option<Address>,
}

/// Postal address owned by a [`Person`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub ville: String,

    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub pays: String,
}

/// A JSON `null` leaves the field empty instead of failing the whole body.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Person {
    pub fn new(id: impl Into<String>, prenom: impl Into<String>, nom: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prenom: prenom.into(),
            nom: nom.into(),
            addresse: None,
        }
    }

    pub fn with_address(mut self, ville: impl Into<String>, pays: impl Into<String>) -> Self {
        self.addresse = Some(Address {
            ville: ville.into(),
            pays: pays.into(),
        });
        self
    }

    /// True for the empty-shell value returned when a lookup misses.
    pub fn is_empty_shell(&self) -> bool {
        *self == Person::default()
    }
}

/// Result of decoding a request body into a [`Person`].
///
/// Kept as a value rather than a `Result` because the default API
/// posture treats a bad body as a zero-value person, not as a failure.
#[derive(Debug)]
pub enum PersonBody {
    /// The body decoded cleanly.
    Parsed(Person),
    /// No body was sent.
    Empty,
    /// The body was present but not a JSON person.
    Malformed(serde_json::Error),
}

impl PersonBody {
    pub fn decode(bytes: &[u8]) -> Self {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return PersonBody::Empty;
        }
        // Only the first JSON value counts; anything after it is ignored.
        let first = match serde_json::Deserializer::from_slice(bytes)
            .into_iter::<Value>()
            .next()
        {
            Some(Ok(value)) => value,
            Some(Err(e)) => return PersonBody::Malformed(e),
            None => return PersonBody::Empty,
        };
        match serde_json::from_value::<Person>(fold_keys(first)) {
            Ok(person) => PersonBody::Parsed(person),
            Err(e) => PersonBody::Malformed(e),
        }
    }

    /// The decoded person, or the zero value for empty and malformed bodies.
    pub fn into_person_or_default(self) -> Person {
        match self {
            PersonBody::Parsed(person) => person,
            PersonBody::Empty | PersonBody::Malformed(_) => Person::default(),
        }
    }
}

/// Lowercase object keys so `Prenom` or `NOM` land on their field.
///
/// An exact lowercase key wins over its case variants. The nested address
/// object is folded the same way.
fn fold_keys(value: Value) -> Value {
    let Value::Object(map) = value else {
        return value;
    };
    let (exact, variants): (Vec<_>, Vec<_>) = map
        .into_iter()
        .partition(|(key, _)| key.to_lowercase() == *key);

    let mut folded = Map::new();
    for (key, value) in variants.into_iter().chain(exact) {
        let key = key.to_lowercase();
        let value = if key == "addresse" { fold_keys(value) } else { value };
        folded.insert(key, value);
    }
    Value::Object(folded)
}
