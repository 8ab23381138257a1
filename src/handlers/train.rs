//! Train handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{AppResult, AppState};

#[derive(Debug, Serialize)]
pub struct TrainResponse {
    status: &'static str,
    accuracy: String,
}

/// Fit the classifier on the full dataset and persist it
pub async fn train(State(state): State<AppState>) -> AppResult<Json<TrainResponse>> {
    let accuracy = state.trainer.train()?;

    Ok(Json(TrainResponse {
        status: "success",
        accuracy: format!("{:.2}", accuracy),
    }))
}
