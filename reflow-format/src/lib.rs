//! # reflow-format
//!
//! Concurrent formatting orchestration over immutable [`reflow_core::Solution`] snapshots.
//!
//! A [`FormatStrategy`] dispatches one task per document and hands back the
//! pending results in input order. The [`Orchestrator`] then applies them one at
//! a time, in that same order, into a new solution. [`WhitespaceStrategy`] is the
//! stock strategy; it delegates the transformation itself to a [`FormattingEngine`].

pub mod diff;
pub mod engine;
pub mod error;
pub mod formatter;
pub mod logger;
pub mod pipeline;
pub mod whitespace;

pub use engine::{EngineError, FormattingEngine};
pub use error::FormatError;
pub use formatter::{
    CodeFormatter, FormatOutcome, FormatRun, FormatStrategy, Orchestrator, PendingResult,
};
pub use logger::{init_tracing, FormatEvent, FormatLogger, SharedLogger, TracingLogger};
pub use whitespace::{WhitespaceFormatter, WhitespaceStrategy};

pub use tokio_util::sync::CancellationToken;
