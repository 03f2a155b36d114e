//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, StatusCode},
    routing::post,
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use personnes_gateway::config::GatewayConfig;

/// Requests seen by a mock legacy service.
#[derive(Clone, Default)]
pub struct Recorded {
    inner: Arc<Mutex<Vec<RecordedRequest>>>,
}

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub content_type: Option<String>,
    pub body: String,
}

impl Recorded {
    #[allow(dead_code)]
    pub fn all(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().clone()
    }
}

/// SOAP response for a country, shaped like the Spring WS sample service.
pub fn country_envelope(name: &str, population: &str, capital: &str, currency: &str) -> String {
    format!(
        r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/"><SOAP-ENV:Header/><SOAP-ENV:Body><ns2:getCountryResponse xmlns:ns2="http://spring.io/guides/gs-producing-web-service"><ns2:country><ns2:name>{name}</ns2:name><ns2:population>{population}</ns2:population><ns2:capital>{capital}</ns2:capital><ns2:currency>{currency}</ns2:currency></ns2:country></ns2:getCountryResponse></SOAP-ENV:Body></SOAP-ENV:Envelope>"#
    )
}

/// Start a programmable mock legacy service on an ephemeral port.
///
/// `respond` receives the raw request body and returns the status and body
/// to answer with. Returns the full endpoint URL and the request recorder.
pub async fn start_mock_legacy<F>(respond: F) -> (String, Recorded)
where
    F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
{
    let recorded = Recorded::default();
    let respond = Arc::new(respond);

    let app = Router::new()
        .route(
            "/ws",
            post(
                |State((recorded, respond)): State<(Recorded, Arc<F>)>,
                 headers: HeaderMap,
                 body: String| async move {
                    recorded.inner.lock().unwrap().push(RecordedRequest {
                        content_type: headers
                            .get(header::CONTENT_TYPE)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string),
                        body: body.clone(),
                    });
                    let (status, reply) = respond(&body);
                    (
                        StatusCode::from_u16(status).unwrap(),
                        [(header::CONTENT_TYPE, "text/xml;charset=utf-8")],
                        reply,
                    )
                },
            ),
        )
        .with_state((recorded.clone(), respond));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (format!("http://{}/ws", addr), recorded)
}

/// An endpoint URL nothing is listening on.
#[allow(dead_code)]
pub fn closed_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/ws", addr)
}

/// Default config pointed at `legacy_url`.
pub fn test_config(legacy_url: &str) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.legacy.endpoint_url = legacy_url.to_string();
    config.legacy.timeout_secs = Some(5);
    config
}

/// Send one request through `app` in-process and decode the JSON answer.
#[allow(dead_code)]
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, HeaderMap, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, headers, json)
}
