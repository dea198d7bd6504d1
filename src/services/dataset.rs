use crate::models::{Dataset, DatasetValidationError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when reading the dataset document
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset: {0}")]
    Malformed(String),

    #[error("Malformed dataset: {0}")]
    Invalid(#[from] DatasetValidationError),
}

/// Anything that can hand out a fresh copy of the dataset
///
/// Implementations are read on every tool call and must not cache.
pub trait DatasetSource: Send + Sync {
    fn load(&self) -> Result<Dataset, DatasetError>;
}

/// Parse and validate a dataset document
pub fn parse_dataset(json: &str) -> Result<Dataset, DatasetError> {
    let dataset: Dataset =
        serde_json::from_str(json).map_err(|e| DatasetError::Malformed(e.to_string()))?;

    dataset.validate()?;

    Ok(dataset)
}

/// Dataset stored as a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileDataset {
    path: PathBuf,
}

impl FileDataset {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for FileDataset {
    fn load(&self) -> Result<Dataset, DatasetError> {
        tracing::debug!("Loading dataset from: {}", self.path.display());

        let json = std::fs::read_to_string(&self.path).map_err(|source| DatasetError::Unreadable {
            path: self.path.display().to_string(),
            source,
        })?;

        let dataset = parse_dataset(&json)?;

        tracing::debug!(
            "Loaded {} hospitals, {} donors, {} recipients",
            dataset.hospitals.len(),
            dataset.donors.len(),
            dataset.recipients.len()
        );

        Ok(dataset)
    }
}

/// Dataset held in memory as raw JSON, parsed again on each load
#[derive(Debug, Clone)]
pub struct InlineDataset {
    json: String,
}

impl InlineDataset {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl DatasetSource for InlineDataset {
    fn load(&self) -> Result<Dataset, DatasetError> {
        parse_dataset(&self.json)
    }
}
