//! Country endpoint backed by the legacy SOAP bridge.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::legacy::{BridgeOutcome, Country};

/// `GET /country/{name}`
///
/// Answers 200 with an empty country when the bridge degrades, unless
/// strict mode turns that into a 502.
pub async fn get_country(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Country>, ApiError> {
    let outcome = state.bridge.query_country(&name).await;
    match outcome {
        BridgeOutcome::Degraded(e) if state.strict_mode => Err(ApiError::BadGateway(e)),
        outcome => Ok(Json(outcome.into_country())),
    }
}
