// Import file parsing

use crate::error::{Result, StoreError};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// One entry of an import file: a JSON array of these records.
///
/// Both fields are required; a record missing either is a format error.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportRecord {
    pub description: String,
    pub completed: bool,
}

/// Read and parse an import file.
///
/// The whole file must be a single JSON array; any parse failure fails
/// the read, no records are salvaged.
pub fn read_import_file(path: &Path) -> Result<Vec<ImportRecord>> {
    let data = fs::read_to_string(path).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let records: Vec<ImportRecord> =
        serde_json::from_str(&data).map_err(|e| StoreError::Format {
            path: path.to_path_buf(),
            source: e,
        })?;

    debug!(file = ?path, count = records.len(), "Parsed import file");

    Ok(records)
}
