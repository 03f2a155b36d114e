//! Outbound SOAP transport.
//!
//! # Responsibilities
//! - POST rendered envelopes to the configured endpoint
//! - Buffer the complete response body
//! - Report the transport status without enforcing it

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};

use crate::config::LegacyConfig;
use crate::legacy::error::BridgeResult;

/// Raw answer from the legacy service.
#[derive(Debug, Clone)]
pub struct RawReply {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// HTTP client bound to one legacy endpoint.
#[derive(Clone)]
pub struct LegacyClient {
    http: Client,
    endpoint: String,
}

impl LegacyClient {
    /// Build a client from configuration.
    ///
    /// System proxy settings are ignored; the legacy service is reached
    /// directly.
    pub fn new(config: &LegacyConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().no_proxy();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: config.endpoint_url.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `document` and read the whole reply into memory.
    pub async fn post_envelope(&self, document: String) -> BridgeResult<RawReply> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/xml")
            .body(document)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();

        Ok(RawReply { status, body })
    }
}
