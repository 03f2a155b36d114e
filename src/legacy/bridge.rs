//! REST → SOAP → JSON country bridge.
//!
//! # Data Flow
//! ```text
//! country name
//!     → template.rs (render getCountryRequest)
//!     → client.rs (POST text/xml, buffer reply)
//!     → envelope.rs (unwrap Envelope/Body/getCountryResponse/country)
//!     → BridgeOutcome
//! ```
//!
//! # Design Decisions
//! - A non-200 status is logged, never enforced; the body is still parsed
//! - Transport and parse failures become `BridgeOutcome::Degraded` so the
//!   HTTP layer decides between an empty 200 and an explicit 502

use crate::config::LegacyConfig;
use crate::legacy::client::LegacyClient;
use crate::legacy::envelope::{unwrap_country, Country};
use crate::legacy::error::BridgeError;
use crate::legacy::template::RequestTemplate;
use crate::lifecycle::startup::StartupError;
use crate::observability::metrics;

/// Result of one bridge call.
#[derive(Debug)]
pub enum BridgeOutcome {
    /// The reply parsed; the country may still be partially empty.
    Delivered(Country),
    /// No country could be obtained.
    Degraded(BridgeError),
}

impl BridgeOutcome {
    /// The relayed country, or the empty country when degraded.
    pub fn into_country(self) -> Country {
        match self {
            BridgeOutcome::Delivered(country) => country,
            BridgeOutcome::Degraded(_) => Country::default(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, BridgeOutcome::Degraded(_))
    }
}

/// Renders, sends and unwraps `getCountry` calls.
pub struct CountryBridge {
    template: RequestTemplate,
    client: LegacyClient,
}

impl CountryBridge {
    pub fn new(template: RequestTemplate, client: LegacyClient) -> Self {
        Self { template, client }
    }

    /// Build the bridge from configuration. A broken request skeleton or
    /// an unbuildable HTTP client is fatal.
    pub fn from_config(config: &LegacyConfig) -> Result<Self, StartupError> {
        let template = RequestTemplate::get_country()?;
        let client = LegacyClient::new(config).map_err(StartupError::HttpClient)?;
        Ok(Self::new(template, client))
    }

    pub async fn query_country(&self, name: &str) -> BridgeOutcome {
        let document = self.template.render(name);

        let reply = match self.client.post_envelope(document).await {
            Ok(reply) => reply,
            Err(e) => return self.degrade(name, e),
        };

        if reply.status != reqwest::StatusCode::OK {
            tracing::warn!(
                endpoint = %self.client.endpoint(),
                status = %reply.status,
                "Legacy service answered with non-200 status"
            );
        }

        tracing::debug!(
            country = %name,
            body = %String::from_utf8_lossy(&reply.body),
            "Legacy response received"
        );

        match unwrap_country(&reply.body) {
            Ok(country) => {
                metrics::record_bridge_call("delivered");
                BridgeOutcome::Delivered(country)
            }
            Err(e) => self.degrade(name, e),
        }
    }

    fn degrade(&self, name: &str, error: BridgeError) -> BridgeOutcome {
        tracing::warn!(
            endpoint = %self.client.endpoint(),
            country = %name,
            error = %error,
            "Legacy country call degraded"
        );
        metrics::record_bridge_call(error.kind());
        BridgeOutcome::Degraded(error)
    }
}
