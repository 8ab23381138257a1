//! Collect handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct CollectRequest {
    pub label: Option<String>,
    pub landmarks: Option<Vec<f64>>,
}

#[derive(Debug, Serialize)]
pub struct CollectResponse {
    status: &'static str,
}

/// Append one labeled landmark sample to the dataset
pub async fn collect(
    State(state): State<AppState>,
    Json(req): Json<CollectRequest>,
) -> AppResult<Json<CollectResponse>> {
    let (Some(label), Some(landmarks)) = (req.label, req.landmarks) else {
        return Err(AppError::Validation("Missing data".to_string()));
    };

    state.store.append(&label, &landmarks)?;

    Ok(Json(CollectResponse { status: "success" }))
}
