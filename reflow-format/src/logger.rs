//! Fixed log vocabulary for formatting runs.
//!
//! Two events exist, each naming a document by file name only. Dispatch tasks
//! and the apply loop log through the same [`SharedLogger`], so implementations
//! must accept concurrent writers.

use std::sync::Arc;

/// A progress event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatEvent<'a> {
    /// A dispatch task is about to hand the document to the engine.
    FormattingStarted { file: &'a str },
    /// A changed document was merged into the solution.
    Formatted { file: &'a str },
}

impl<'a> FormatEvent<'a> {
    pub fn file(&self) -> &'a str {
        match *self {
            FormatEvent::FormattingStarted { file } | FormatEvent::Formatted { file } => file,
        }
    }
}

/// Sink for [`FormatEvent`]s.
pub trait FormatLogger: Send + Sync {
    fn log(&self, event: FormatEvent<'_>);
}

pub type SharedLogger = Arc<dyn FormatLogger>;

/// Emits events through `tracing`: `FormattingStarted` at trace, `Formatted` at info.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn shared() -> SharedLogger {
        Arc::new(Self)
    }
}

impl FormatLogger for TracingLogger {
    fn log(&self, event: FormatEvent<'_>) {
        match event {
            FormatEvent::FormattingStarted { file } => {
                tracing::trace!(file = %file, "formatting code file");
            }
            FormatEvent::Formatted { file } => {
                tracing::info!(file = %file, "formatted code file");
            }
        }
    }
}

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
