//! Seam to the external formatting engine.
//!
//! The engine owns the style rules. This crate only schedules it and decides
//! what to do with its output.

use std::error::Error as StdError;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use reflow_core::{Document, FormattingOptions};

/// Failure reported by a [`FormattingEngine`].
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine stopped because the cancellation token fired.
    #[error("formatting cancelled")]
    Cancelled,

    #[error("{0}")]
    Failed(#[source] Box<dyn StdError + Send + Sync + 'static>),
}

impl EngineError {
    pub fn failed(err: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
        Self::Failed(err.into())
    }
}

/// Transforms one document according to its options.
///
/// Implementations must be safe to call from many tasks at once.
#[async_trait]
pub trait FormattingEngine: Send + Sync {
    async fn format(
        &self,
        document: &Document,
        options: &FormattingOptions,
        cancel: &CancellationToken,
    ) -> Result<Document, EngineError>;
}

#[async_trait]
impl<T: FormattingEngine + ?Sized> FormattingEngine for Arc<T> {
    async fn format(
        &self,
        document: &Document,
        options: &FormattingOptions,
        cancel: &CancellationToken,
    ) -> Result<Document, EngineError> {
        (**self).format(document, options, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_keeps_message() {
        let err = EngineError::failed("unbalanced braces");
        assert_eq!(err.to_string(), "unbalanced braces");
        assert!(StdError::source(&err).is_some());
    }
}
