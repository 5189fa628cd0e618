//! Unified diffs between two solution snapshots.
//!
//! Nothing is written; callers decide what to do with the rendered text.

use std::path::PathBuf;

use similar::TextDiff;

use reflow_core::{DocumentId, Solution};

/// A single document diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDiff {
    pub id: DocumentId,
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Render a diff for every document whose text differs between `before` and `after`.
///
/// Ordered by document id. Documents present on only one side are skipped.
pub fn document_diffs(before: &Solution, after: &Solution) -> Vec<DocumentDiff> {
    before
        .changed_documents(after)
        .into_iter()
        .filter_map(|id| {
            let old = before.document(&id)?;
            let new = after.document(&id)?;
            let old_header = format!("a/{}", old.path().display());
            let new_header = format!("b/{}", new.path().display());
            let unified = TextDiff::from_lines(old.text().as_str(), new.text().as_str())
                .unified_diff()
                .header(&old_header, &new_header)
                .context_radius(3)
                .to_string();
            Some(DocumentDiff {
                path: new.path().to_path_buf(),
                id,
                unified_diff: unified,
            })
        })
        .collect()
}
