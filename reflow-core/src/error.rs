//! Error types for reflow-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::DocumentId;

/// All errors that can arise from snapshot and configuration operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A snapshot update named a document the solution does not contain.
    #[error("document not found in solution: {id}")]
    DocumentNotFound { id: DocumentId },

    /// Underlying I/O failure while reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error for in-memory config text.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse formatting config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The config file did not exist at the expected path.
    #[error("formatting config not found at {path}")]
    ConfigNotFound { path: PathBuf },
}
