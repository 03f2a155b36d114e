//! SOAP response unwrapping.
//!
//! # Data Flow
//! ```text
//! Envelope
//!   ├── Header          (ignored)
//!   └── Body
//!         └── getCountryResponse
//!               └── country → Country (re-emitted as flat JSON)
//! ```
//!
//! Elements are matched by local name, so whatever prefixes the service
//! binds (`SOAP-ENV:`, `ns2:`, ...) do not matter. Missing wrappers leave
//! the country at its defaults rather than failing.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::legacy::error::BridgeResult;

/// Country data relayed from the legacy service. Every field is text,
/// population included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub population: String,
    #[serde(default)]
    pub capital: String,
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Envelope {
    #[serde(rename = "Header", default)]
    pub header: Option<IgnoredAny>,
    #[serde(rename = "Body", default)]
    pub body: Body,
}

#[derive(Debug, Default, Deserialize)]
pub struct Body {
    #[serde(rename = "getCountryResponse", default)]
    pub response: CountryResponse,
}

#[derive(Debug, Default, Deserialize)]
pub struct CountryResponse {
    #[serde(default)]
    pub country: Country,
}

impl Envelope {
    pub fn into_country(self) -> Country {
        self.body.response.country
    }
}

/// Parse a raw response body and extract its country payload.
pub fn unwrap_country(raw: &[u8]) -> BridgeResult<Country> {
    let text = std::str::from_utf8(raw)?;
    let envelope: Envelope = quick_xml::de::from_str(text)?;
    Ok(envelope.into_country())
}
