//! Training and inference pipeline around the bagged-tree classifier

pub mod forest;
pub mod predictor;
pub mod trainer;

pub use forest::Forest;
pub use predictor::{Prediction, Predictor};
pub use trainer::Trainer;
