//! Whitespace formatting strategy.
//!
//! Every document gets its own task, spawned before any result is awaited.
//! Tasks share nothing but the logger and the engine.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use reflow_core::{Document, FormattingOptions};

use crate::engine::FormattingEngine;
use crate::error::{engine_err, FormatError};
use crate::formatter::{FormatOutcome, FormatStrategy, Orchestrator, PendingResult};
use crate::logger::{FormatEvent, FormatLogger, SharedLogger};

/// Dispatches each document to a [`FormattingEngine`] and reports only real changes.
#[derive(Clone)]
pub struct WhitespaceStrategy {
    engine: Arc<dyn FormattingEngine>,
}

impl WhitespaceStrategy {
    pub fn new(engine: Arc<dyn FormattingEngine>) -> Self {
        Self { engine }
    }
}

impl std::fmt::Debug for WhitespaceStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhitespaceStrategy").finish_non_exhaustive()
    }
}

impl FormatStrategy for WhitespaceStrategy {
    fn dispatch(
        &self,
        documents: &[(Document, FormattingOptions)],
        logger: &SharedLogger,
        cancel: &CancellationToken,
    ) -> Vec<PendingResult> {
        documents
            .iter()
            .map(|(document, options)| {
                let engine = Arc::clone(&self.engine);
                let logger = Arc::clone(logger);
                let cancel = cancel.clone();
                let task_document = document.clone();
                let options = options.clone();
                PendingResult::spawn(document.clone(), async move {
                    format_document(
                        engine.as_ref(),
                        logger.as_ref(),
                        &task_document,
                        &options,
                        &cancel,
                    )
                    .await
                })
            })
            .collect()
    }
}

async fn format_document(
    engine: &dyn FormattingEngine,
    logger: &dyn FormatLogger,
    document: &Document,
    options: &FormattingOptions,
    cancel: &CancellationToken,
) -> Result<FormatOutcome, FormatError> {
    if cancel.is_cancelled() {
        return Err(FormatError::Cancelled);
    }

    let file = document.display_name();
    logger.log(FormatEvent::FormattingStarted { file: &file });

    let formatted = engine
        .format(document, options, cancel)
        .await
        .map_err(|e| engine_err(&file, e, cancel))?;

    // Skip documents the engine left as they were.
    if formatted.text().content_equals(document.text()) {
        return Ok(FormatOutcome::Unchanged);
    }
    Ok(FormatOutcome::Changed(formatted.text().clone()))
}

/// Orchestrator running the whitespace strategy.
pub type WhitespaceFormatter = Orchestrator<WhitespaceStrategy>;

impl Orchestrator<WhitespaceStrategy> {
    pub fn whitespace(engine: Arc<dyn FormattingEngine>) -> Self {
        Orchestrator::new(WhitespaceStrategy::new(engine))
    }
}
