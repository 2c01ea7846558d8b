// Error taxonomy for store operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the task store.
///
/// Mutations on non-existent ids are deliberately NOT errors; they no-op.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Required input was empty or missing.
    #[error("invalid input: {0}")]
    Validation(String),

    /// A file or directory could not be read or created.
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An import file was not the expected JSON structure.
    #[error("malformed import file {}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Underlying database failure.
    #[error(transparent)]
    Db(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
