//! Signlab backend
//!
//! Minimal server behind a sign-language gesture trainer: records labeled
//! hand-landmark samples to a CSV dataset, trains a bagged decision-tree
//! classifier on it, and serves predictions from the persisted model.
//!
//! ```text
//! collect ──▶ SampleStore ──▶ data/dataset.csv
//! train   ──▶ Trainer     ──▶ model.json
//! predict ──▶ Predictor   ◀── model.json
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod store;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};
use model::{Predictor, Trainer};
use store::SampleStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: SampleStore,
    pub trainer: Trainer,
    pub predictor: Predictor,
}

impl AppState {
    /// Wire the components onto their configured storage locations
    pub fn new(config: &config::Config) -> Self {
        let store = SampleStore::new(&config.data_file);
        Self {
            trainer: Trainer::new(store.clone(), &config.model_file),
            predictor: Predictor::new(&config.model_file),
            store,
        }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::check))
        .route("/collect", post(handlers::collect::collect))
        .route("/train", post(handlers::train::train))
        .route("/predict", post(handlers::predict::predict))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
