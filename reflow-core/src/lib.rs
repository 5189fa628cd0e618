//! Reflow core library — immutable document snapshots, formatting options, errors.
//!
//! Public API surface:
//! - [`types`] — document identity, text snapshots, documents
//! - [`solution`] — the copy-on-write [`Solution`] aggregate
//! - [`options`] — [`FormattingOptions`] and the YAML [`FormatConfig`]
//! - [`error`] — [`CoreError`]

pub mod error;
pub mod options;
pub mod solution;
pub mod types;

pub use error::CoreError;
pub use options::{FormatConfig, FormattingOptions, OptionOverride, OptionValue};
pub use solution::Solution;
pub use types::{Document, DocumentId, TextSnapshot};
