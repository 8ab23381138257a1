//! Bootstrap-aggregated ensemble of decision trees
//!
//! Multi-class classifier over landmark vectors: each tree is fitted on a
//! bootstrap sample of the training set and prediction is a majority vote.
//! The vote share of the winning class doubles as the confidence estimate.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use linfa::prelude::*;
use linfa::DatasetBase;
use linfa_trees::DecisionTree;
use ndarray::{aview1, Array1, Array2, ArrayBase, ArrayView1, Axis, Data, Ix2};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Trees per forest
pub const NUM_TREES: usize = 100;

/// Fitted classifier: class-name table plus the fitted trees.
///
/// Class indices in the trees refer to positions in `classes`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Forest {
    classes: Vec<String>,
    trees: Vec<DecisionTree<f64, usize>>,
}

impl Forest {
    /// Fit `NUM_TREES` trees, each on a bootstrap sample of `train`.
    ///
    /// The rng is seeded so identical inputs produce an identical forest.
    pub fn fit(
        train: &DatasetBase<Array2<f64>, Array1<usize>>,
        classes: Vec<String>,
        seed: u64,
    ) -> AppResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);

        let trees: Vec<DecisionTree<f64, usize>> = train
            .bootstrap_samples(train.nsamples(), &mut rng)
            .take(NUM_TREES)
            .map(|sample| {
                DecisionTree::params()
                    .fit(&sample)
                    .map_err(|e| AppError::Internal(e.to_string()))
            })
            .collect::<AppResult<_>>()?;

        Ok(Self { classes, trees })
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Per-row vote counts, one column per class
    fn votes<D: Data<Elem = f64>>(&self, records: &ArrayBase<D, Ix2>) -> Array2<usize> {
        let mut votes = Array2::zeros((records.nrows(), self.classes.len()));
        for tree in &self.trees {
            let predicted = tree.predict(records);
            for (row, &class) in predicted.iter().enumerate() {
                votes[[row, class]] += 1;
            }
        }
        votes
    }

    /// Majority-vote class index per row
    pub fn predict<D: Data<Elem = f64>>(&self, records: &ArrayBase<D, Ix2>) -> Array1<usize> {
        self.votes(records)
            .rows()
            .into_iter()
            .map(winning_class)
            .collect()
    }

    /// Classify a single landmark vector: (label, vote share of the winner)
    pub fn predict_one(&self, landmarks: &[f64]) -> (String, f64) {
        let records = aview1(landmarks).insert_axis(Axis(0));
        let votes = self.votes(&records);
        let row = votes.row(0);
        let winner = winning_class(row);
        let confidence = row[winner] as f64 / self.trees.len() as f64;
        (self.classes[winner].clone(), confidence)
    }

    /// Serialize to `path`, overwriting any prior model
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

/// Index of the highest vote count; ties go to the lowest class index
fn winning_class(counts: ArrayView1<usize>) -> usize {
    let mut best = 0;
    for (class, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = class;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use linfa::Dataset;
    use ndarray::array;
    use tempfile::tempdir;

    fn toy_forest() -> Forest {
        // Two well-separated clusters in 2 dimensions
        let records = array![
            [0.0, 0.1],
            [0.1, 0.0],
            [0.05, 0.05],
            [1.0, 0.9],
            [0.9, 1.0],
            [0.95, 0.95],
        ];
        let targets = array![0usize, 0, 0, 1, 1, 1];
        let train = Dataset::new(records, targets);

        Forest::fit(&train, vec!["open".to_string(), "fist".to_string()], 42).unwrap()
    }

    #[test]
    fn fit_separates_clusters() {
        let forest = toy_forest();

        let (label, confidence) = forest.predict_one(&[0.02, 0.03]);
        assert_eq!(label, "open");
        assert!(confidence > 0.5 && confidence <= 1.0);

        let (label, _) = forest.predict_one(&[0.97, 0.92]);
        assert_eq!(label, "fist");
    }

    #[test]
    fn fit_is_deterministic_for_a_fixed_seed() {
        let first = toy_forest();
        let second = toy_forest();

        let (label_a, conf_a) = first.predict_one(&[0.4, 0.6]);
        let (label_b, conf_b) = second.predict_one(&[0.4, 0.6]);
        assert_eq!(label_a, label_b);
        assert_eq!(conf_a, conf_b);
    }

    #[test]
    fn saved_model_is_loadable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");

        let forest = toy_forest();
        forest.save(&path).unwrap();

        let loaded = Forest::load(&path).unwrap();
        assert_eq!(loaded.classes(), forest.classes());
        assert_eq!(
            loaded.predict_one(&[0.02, 0.03]),
            forest.predict_one(&[0.02, 0.03])
        );
    }
}
