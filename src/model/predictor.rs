//! Predictor - scores a single landmark vector against the persisted model

use std::path::PathBuf;

use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::model::forest::Forest;
use crate::store::LANDMARK_DIMS;

/// Result of classifying one landmark vector
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub prediction: String,
    pub confidence: f64,
}

#[derive(Debug, Clone)]
pub struct Predictor {
    model_path: PathBuf,
}

impl Predictor {
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
        }
    }

    /// Classify one landmark vector.
    ///
    /// The model file is re-read on every call; a train that finished after
    /// the last predict is picked up without any reload step.
    pub fn predict(&self, landmarks: &[f64]) -> AppResult<Prediction> {
        if !self.model_path.exists() {
            return Err(AppError::ModelNotFound);
        }

        if landmarks.len() != LANDMARK_DIMS {
            return Err(AppError::Validation(format!(
                "Invalid hand data shape: expected {} points, got {}",
                LANDMARK_DIMS,
                landmarks.len()
            )));
        }

        let forest = Forest::load(&self.model_path)?;
        let (label, confidence) = forest.predict_one(landmarks);
        tracing::info!(%label, confidence, "prediction served");

        Ok(Prediction {
            prediction: label,
            confidence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Trainer;
    use crate::store::SampleStore;
    use tempfile::{tempdir, TempDir};

    fn train_model(dir: &TempDir) -> Predictor {
        let store = SampleStore::new(dir.path().join("dataset.csv"));
        for fill in [0.0, 0.01, 0.05] {
            store.append("open", &vec![fill; LANDMARK_DIMS]).unwrap();
        }
        for fill in [1.0, 0.95, 0.9] {
            store.append("fist", &vec![fill; LANDMARK_DIMS]).unwrap();
        }

        let model_path = dir.path().join("model.json");
        Trainer::new(store, &model_path).train().unwrap();
        Predictor::new(&model_path)
    }

    #[test]
    fn predict_without_model_fails() {
        let dir = tempdir().unwrap();
        let predictor = Predictor::new(dir.path().join("model.json"));

        let err = predictor.predict(&vec![0.0; LANDMARK_DIMS]).unwrap_err();
        assert!(matches!(err, AppError::ModelNotFound));
    }

    #[test]
    fn predict_rejects_wrong_length() {
        let dir = tempdir().unwrap();
        let predictor = train_model(&dir);

        let err = predictor.predict(&[0.0; 10]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("shape"));
    }

    #[test]
    fn predict_returns_label_and_confidence() {
        let dir = tempdir().unwrap();
        let predictor = train_model(&dir);

        let result = predictor.predict(&vec![0.02; LANDMARK_DIMS]).unwrap();
        assert_eq!(result.prediction, "open");
        assert!((0.0..=1.0).contains(&result.confidence));
    }
}
