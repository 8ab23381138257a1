//! Trainer - fits the classifier on the full dataset and persists it

use std::collections::BTreeSet;
use std::path::PathBuf;

use linfa::prelude::*;
use linfa::Dataset;
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{AppError, AppResult};
use crate::model::forest::Forest;
use crate::store::SampleStore;

/// Deterministic train/holdout split seed
const SPLIT_SEED: u64 = 42;
/// Fraction of samples used for fitting; the rest is the holdout
const TRAIN_RATIO: f32 = 0.8;

#[derive(Debug, Clone)]
pub struct Trainer {
    store: SampleStore,
    model_path: PathBuf,
}

impl Trainer {
    pub fn new(store: SampleStore, model_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            model_path: model_path.into(),
        }
    }

    /// Re-read the full dataset, fit a forest, measure holdout accuracy and
    /// overwrite the model file. Returns the accuracy in [0, 1].
    pub fn train(&self) -> AppResult<f64> {
        if !self.store.exists() {
            return Err(AppError::InsufficientData("No dataset found".to_string()));
        }

        let (records, labels) = self.store.load()?;

        if records.nrows() < 2 {
            return Err(AppError::InsufficientData(
                "Not enough data. Collect at least 2 samples.".to_string(),
            ));
        }

        // Sorted distinct labels; their positions become the class indices.
        let classes: Vec<String> = labels
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if classes.len() < 2 {
            return Err(AppError::InsufficientClasses(
                "You need at least 2 different words to train.".to_string(),
            ));
        }

        let targets: Array1<usize> = labels
            .iter()
            .map(|label| classes.iter().position(|c| c == label).unwrap_or(0))
            .collect();

        let mut rng = StdRng::seed_from_u64(SPLIT_SEED);
        let dataset = Dataset::new(records, targets).shuffle(&mut rng);
        let (train, valid) = dataset.split_with_ratio(TRAIN_RATIO);

        let forest = Forest::fit(&train, classes, SPLIT_SEED)?;

        // Empty holdout reports 1.0 by convention.
        let accuracy = if valid.nsamples() > 0 {
            let predicted = forest.predict(valid.records());
            let hits = predicted
                .iter()
                .zip(valid.targets().iter())
                .filter(|(p, t)| p == t)
                .count();
            hits as f64 / valid.nsamples() as f64
        } else {
            1.0
        };

        forest.save(&self.model_path)?;
        tracing::info!(accuracy, "training complete");

        Ok(accuracy)
    }
}
