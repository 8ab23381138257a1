//! Sample store - append-only CSV dataset of labeled landmark vectors
//!
//! One row per sample: `label,v0,...,v62`. The file is created with its
//! header on first append and only ever grows. The trainer reads it back in
//! full; nothing here caches or locks.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use ndarray::Array2;

use crate::error::{AppError, AppResult};

/// Values per landmark vector: 21 hand keypoints x 3 coordinates
pub const LANDMARK_DIMS: usize = 63;

/// Append-only dataset of labeled feature vectors
#[derive(Debug, Clone)]
pub struct SampleStore {
    path: PathBuf,
}

impl SampleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Append one labeled sample, creating the file and header if needed.
    ///
    /// The landmark count is NOT checked here: a mismatched row is accepted
    /// and surfaces later as a training-time shape error.
    pub fn append(&self, label: &str, landmarks: &[f64]) -> AppResult<()> {
        if label.is_empty() || landmarks.is_empty() {
            return Err(AppError::Validation("Missing data".to_string()));
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let write_header = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // Flexible writing: rows are appended as-given, header length is
        // only enforced when the trainer reads the file back.
        let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(file);

        if write_header {
            let mut header = Vec::with_capacity(LANDMARK_DIMS + 1);
            header.push("label".to_string());
            for i in 0..LANDMARK_DIMS {
                header.push(format!("v{}", i));
            }
            writer.write_record(&header)?;
        }

        let mut row = Vec::with_capacity(landmarks.len() + 1);
        row.push(label.to_string());
        row.extend(landmarks.iter().map(|v| v.to_string()));
        writer.write_record(&row)?;
        writer.flush()?;

        Ok(())
    }

    /// Read the full dataset: feature matrix plus the label column.
    ///
    /// Rows whose length disagrees with the header are rejected by the CSV
    /// reader; unparsable feature values are internal errors.
    pub fn load(&self) -> AppResult<(Array2<f64>, Vec<String>)> {
        let mut reader = csv::Reader::from_path(&self.path)?;

        let mut labels = Vec::new();
        let mut values = Vec::new();

        for result in reader.records() {
            let record = result?;
            let mut fields = record.iter();

            let label = fields
                .next()
                .ok_or_else(|| AppError::Internal("empty dataset row".to_string()))?;
            labels.push(label.to_string());

            for field in fields {
                let value: f64 = field.parse().map_err(|_| {
                    AppError::Internal(format!("bad feature value {:?} in dataset", field))
                })?;
                values.push(value);
            }
        }

        let dims = if labels.is_empty() {
            0
        } else {
            values.len() / labels.len()
        };

        let records = Array2::from_shape_vec((labels.len(), dims), values)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        Ok((records, labels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> SampleStore {
        SampleStore::new(dir.path().join("dataset.csv"))
    }

    #[test]
    fn append_writes_header_then_row() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let landmarks = vec![0.5; LANDMARK_DIMS];
        store.append("open", &landmarks).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let mut lines = content.lines();

        let header = lines.next().unwrap();
        assert!(header.starts_with("label,v0,v1,"));
        assert!(header.ends_with("v62"));

        let row = lines.next().unwrap();
        assert!(row.starts_with("open,0.5,"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn append_then_load_round_trips_trailing_row() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store.append("open", &vec![0.0; LANDMARK_DIMS]).unwrap();
        let mut last = vec![0.25; LANDMARK_DIMS];
        last[62] = -1.5;
        store.append("fist", &last).unwrap();

        let (records, labels) = store.load().unwrap();
        assert_eq!(records.nrows(), 2);
        assert_eq!(records.ncols(), LANDMARK_DIMS);
        assert_eq!(labels, vec!["open", "fist"]);
        assert_eq!(records.row(1).to_vec(), last);
    }

    #[test]
    fn append_rejects_empty_label_and_empty_landmarks() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let err = store.append("", &[0.0; 3]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = store.append("open", &[]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        assert!(!store.exists());
    }

    #[test]
    fn short_row_is_accepted_but_fails_on_load() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store.append("open", &[0.1, 0.2, 0.3]).unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
