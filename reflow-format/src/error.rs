//! Error types for reflow-format.

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use reflow_core::CoreError;

use crate::engine::EngineError;

/// All errors that can arise while formatting a solution.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The formatting engine failed on a document.
    #[error("formatting engine failed on {file}: {source}")]
    Engine {
        file: String,
        #[source]
        source: EngineError,
    },

    /// A per-document task panicked or was aborted.
    #[error("formatting task for {file} did not complete: {source}")]
    Join {
        file: String,
        #[source]
        source: tokio::task::JoinError,
    },

    /// A snapshot update was rejected.
    #[error("snapshot error: {0}")]
    Core(#[from] CoreError),

    /// A document task observed the cancellation token. The apply loop turns
    /// this into a partial result while the token is cancelled; otherwise it
    /// is a fault like any other.
    #[error("formatting cancelled")]
    Cancelled,
}

/// Convenience constructor for [`FormatError::Engine`].
///
/// `EngineError::Cancelled` only counts as cancellation when `cancel` fired.
pub(crate) fn engine_err(
    file: impl Into<String>,
    source: EngineError,
    cancel: &CancellationToken,
) -> FormatError {
    match source {
        EngineError::Cancelled if cancel.is_cancelled() => FormatError::Cancelled,
        source => FormatError::Engine {
            file: file.into(),
            source,
        },
    }
}
