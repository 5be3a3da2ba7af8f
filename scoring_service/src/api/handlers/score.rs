//! Scoring endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::{ApiError, ApiResult};
use crate::api::server::AppState;

/// Request payload for `POST /score`.
///
/// The wire key is `X`, matching the payload the deployment pipelines this
/// service validates already send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(rename = "X")]
    pub features: Vec<f64>,
}

/// Response payload: the model output under the `score` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub score: Vec<f64>,
}

/// Score a feature list with the configured model.
///
/// Schema failures (malformed JSON, missing `X`, non-numeric elements) are
/// reported as 400 with a structured error body; a model failure maps to
/// 500.
pub async fn score(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> ApiResult<Json<ScoreResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        let err = ApiError::from(rejection).with_request_id(Uuid::new_v4().to_string());
        log::warn!("rejected score request: {}", err.message);
        err
    })?;

    log::debug!(
        "scoring {} features with model {}",
        request.features.len(),
        state.model.name()
    );

    let score = state.model.predict(&request.features).map_err(|e| {
        log::error!("model {} failed: {}", state.model.name(), e);
        ApiError::from(e).with_request_id(Uuid::new_v4().to_string())
    })?;

    Ok(Json(ScoreResponse { score }))
}
