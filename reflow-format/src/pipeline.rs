//! Runs several formatters over one solution, in order.

use tokio_util::sync::CancellationToken;

use reflow_core::{Document, FormattingOptions, Solution};

use crate::error::FormatError;
use crate::formatter::CodeFormatter;
use crate::logger::SharedLogger;

/// Thread `solution` through every formatter.
///
/// Each formatter sees the documents as left by the previous one. Cancellation
/// is checked between formatters; each formatter also honours it internally.
pub async fn run(
    formatters: &[Box<dyn CodeFormatter>],
    logger: &SharedLogger,
    solution: &Solution,
    documents: &[(Document, FormattingOptions)],
    cancel: &CancellationToken,
) -> Result<Solution, FormatError> {
    let mut current = solution.clone();

    for (index, formatter) in formatters.iter().enumerate() {
        if cancel.is_cancelled() {
            tracing::debug!(remaining = formatters.len() - index, "format pipeline cancelled");
            break;
        }
        let refreshed = refresh_documents(&current, documents);
        current = formatter.format(logger, &current, &refreshed, cancel).await?;
    }

    Ok(current)
}

fn refresh_documents(
    solution: &Solution,
    documents: &[(Document, FormattingOptions)],
) -> Vec<(Document, FormattingOptions)> {
    documents
        .iter()
        .map(|(document, options)| {
            let latest = solution
                .document(document.id())
                .cloned()
                .unwrap_or_else(|| document.clone());
            (latest, options.clone())
        })
        .collect()
}
