//! Predict handler

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::model::Prediction;
use crate::{AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub landmarks: Option<Vec<f64>>,
}

/// Classify one landmark vector with the persisted model
pub async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> AppResult<Json<Prediction>> {
    // A missing landmarks field falls through to the shape check.
    let landmarks = req.landmarks.unwrap_or_default();
    let prediction = state.predictor.predict(&landmarks)?;

    Ok(Json(prediction))
}
