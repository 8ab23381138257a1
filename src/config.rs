//! Configuration module

use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Dataset CSV file
    pub data_file: PathBuf,

    /// Serialized model file
    pub model_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),

            data_file: env::var("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/dataset.csv")),

            model_file: env::var("MODEL_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("model.json")),
        }
    }
}
