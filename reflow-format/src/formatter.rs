//! Formatter contract and the dispatch-then-apply orchestrator.
//!
//! ## Run protocol
//!
//! 1. Dispatch: the strategy starts one task per document and returns the
//!    [`PendingResult`]s in input order.
//! 2. Apply: results are awaited one at a time, in input order, never in
//!    completion order.
//! 3. Cancellation is polled before each await. When it fires, the snapshot
//!    built so far is returned and the remaining tasks are detached.
//! 4. `Unchanged` results are skipped silently; `Changed` results are merged
//!    and logged.
//! 5. The first fault observed stops the run and is returned.

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use reflow_core::{Document, FormattingOptions, Solution, TextSnapshot};

use crate::error::FormatError;
use crate::logger::{FormatEvent, FormatLogger, SharedLogger};

// ---------------------------------------------------------------------------
// Per-document results
// ---------------------------------------------------------------------------

/// Result of formatting a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    /// The engine produced different content.
    Changed(TextSnapshot),
    /// The engine output matched the original content.
    Unchanged,
}

/// A document paired with the task producing its [`FormatOutcome`].
///
/// Dropping a `PendingResult` detaches the task; its output is discarded.
#[derive(Debug)]
pub struct PendingResult {
    document: Document,
    handle: JoinHandle<Result<FormatOutcome, FormatError>>,
}

impl PendingResult {
    pub fn new(document: Document, handle: JoinHandle<Result<FormatOutcome, FormatError>>) -> Self {
        Self { document, handle }
    }

    /// Spawn `work` on the current tokio runtime.
    pub fn spawn<F>(document: Document, work: F) -> Self
    where
        F: std::future::Future<Output = Result<FormatOutcome, FormatError>> + Send + 'static,
    {
        Self::new(document, tokio::spawn(work))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    async fn resolve(self) -> Result<FormatOutcome, FormatError> {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(source) => Err(FormatError::Join {
                file: self.document.display_name(),
                source,
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Contract and strategy hook
// ---------------------------------------------------------------------------

/// Formats a batch of documents and returns the updated solution.
///
/// An empty batch returns the input unchanged. Cancellation is not an error:
/// it yields the partial solution built before it was observed.
#[async_trait]
pub trait CodeFormatter: Send + Sync {
    async fn format(
        &self,
        logger: &SharedLogger,
        solution: &Solution,
        documents: &[(Document, FormattingOptions)],
        cancel: &CancellationToken,
    ) -> Result<Solution, FormatError>;
}

/// Starts formatting work for every document before returning.
///
/// The returned list must hold exactly one entry per input pair, in input order.
pub trait FormatStrategy: Send + Sync {
    fn dispatch(
        &self,
        documents: &[(Document, FormattingOptions)],
        logger: &SharedLogger,
        cancel: &CancellationToken,
    ) -> Vec<PendingResult>;
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Outcome of one orchestrated run.
#[derive(Debug, Clone)]
pub struct FormatRun {
    pub solution: Solution,
    /// Documents merged into `solution`.
    pub formatted: usize,
    /// Documents whose content was already formatted.
    pub unchanged: usize,
    /// Entries never applied because the run was cancelled.
    pub abandoned: usize,
    pub cancelled: bool,
}

impl FormatRun {
    fn untouched(solution: Solution) -> Self {
        Self {
            solution,
            formatted: 0,
            unchanged: 0,
            abandoned: 0,
            cancelled: false,
        }
    }
}

/// Runs a [`FormatStrategy`] and applies its results in input order.
#[derive(Debug, Clone)]
pub struct Orchestrator<S> {
    strategy: S,
}

impl<S: FormatStrategy> Orchestrator<S> {
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// Like [`CodeFormatter::format`], also reporting what happened.
    pub async fn format_with_summary(
        &self,
        logger: &SharedLogger,
        solution: &Solution,
        documents: &[(Document, FormattingOptions)],
        cancel: &CancellationToken,
    ) -> Result<FormatRun, FormatError> {
        if documents.is_empty() {
            return Ok(FormatRun::untouched(solution.clone()));
        }

        let pending = self.strategy.dispatch(documents, logger, cancel);
        apply_changes(solution.clone(), pending, logger.as_ref(), cancel).await
    }
}

#[async_trait]
impl<S: FormatStrategy> CodeFormatter for Orchestrator<S> {
    async fn format(
        &self,
        logger: &SharedLogger,
        solution: &Solution,
        documents: &[(Document, FormattingOptions)],
        cancel: &CancellationToken,
    ) -> Result<Solution, FormatError> {
        let run = self
            .format_with_summary(logger, solution, documents, cancel)
            .await?;
        Ok(run.solution)
    }
}

pub(crate) async fn apply_changes(
    solution: Solution,
    pending: Vec<PendingResult>,
    logger: &dyn FormatLogger,
    cancel: &CancellationToken,
) -> Result<FormatRun, FormatError> {
    let total = pending.len();
    let mut run = FormatRun::untouched(solution);
    let mut applied = 0usize;

    for entry in pending {
        if cancel.is_cancelled() {
            run.cancelled = true;
            break;
        }

        let id = entry.document().id().clone();
        let file = entry.document().display_name();
        match entry.resolve().await {
            Ok(FormatOutcome::Unchanged) => run.unchanged += 1,
            Ok(FormatOutcome::Changed(text)) => {
                run.solution = run.solution.with_document_text(&id, text)?;
                logger.log(FormatEvent::Formatted { file: &file });
                run.formatted += 1;
            }
            Err(FormatError::Cancelled) if cancel.is_cancelled() => {
                run.cancelled = true;
                break;
            }
            Err(err) => return Err(err),
        }
        applied += 1;
    }

    run.abandoned = total - applied;
    tracing::debug!(
        formatted = run.formatted,
        unchanged = run.unchanged,
        abandoned = run.abandoned,
        cancelled = run.cancelled,
        "applied formatting changes",
    );
    Ok(run)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
