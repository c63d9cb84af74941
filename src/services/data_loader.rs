//! Dataset file loading
//!
//! The dataset is read once at startup and handed to the aggregation
//! engine by reference; nothing here caches or mutates.

use std::fs;
use std::path::Path;

use crate::types::{Dataset, KpidashError, MonthKey, Result};

/// Loads a dashboard dataset from a JSON file.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Read and parse a dataset file (SIMD JSON hot path).
    ///
    /// Unknown keys are ignored and missing sections default to empty;
    /// only I/O failures and JSON syntax errors surface.
    pub fn load(path: &Path) -> Result<Dataset> {
        let mut bytes = fs::read(path)?;
        simd_json::from_slice(&mut bytes).map_err(|e| KpidashError::Parse(e.to_string()))
    }

    /// Default reporting month: the month of the dataset's coverage end
    /// when present, otherwise the current calendar month.
    pub fn default_month(dataset: &Dataset) -> MonthKey {
        let end_month = dataset
            .metadata
            .date_range
            .as_ref()
            .and_then(|r| r.end.get(0..7));
        MonthKey::parse_or_current(end_month)
    }
}
