//! Immutable, versioned aggregate of documents.
//!
//! A [`Solution`] is never mutated. [`Solution::with_document_text`] returns a
//! new value that shares every untouched document with its source, so work
//! that captured an earlier snapshot keeps reading consistent data while new
//! snapshots are built.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::CoreError;
use crate::types::{Document, DocumentId, TextSnapshot};

#[derive(Debug, Clone, Default)]
pub struct Solution {
    version: u64,
    documents: Arc<BTreeMap<DocumentId, Document>>,
}

impl Solution {
    /// Build a solution at version 0. A later document with a duplicate id
    /// replaces the earlier one.
    pub fn new(documents: impl IntoIterator<Item = Document>) -> Self {
        let documents = documents
            .into_iter()
            .map(|doc| (doc.id().clone(), doc))
            .collect();
        Self {
            version: 0,
            documents: Arc::new(documents),
        }
    }

    /// Number of snapshot updates applied since construction.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn document(&self, id: &DocumentId) -> Option<&Document> {
        self.documents.get(id)
    }

    /// Documents ordered by id.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Return a new solution whose document `id` carries `text`.
    ///
    /// The receiver is left untouched. Returns [`CoreError::DocumentNotFound`]
    /// for an unknown id.
    pub fn with_document_text(
        &self,
        id: &DocumentId,
        text: impl Into<TextSnapshot>,
    ) -> Result<Solution, CoreError> {
        let current = self
            .documents
            .get(id)
            .ok_or_else(|| CoreError::DocumentNotFound { id: id.clone() })?;
        let updated = current.with_text(text);

        // The map clone copies entries, and each entry only bumps reference counts.
        let mut documents = (*self.documents).clone();
        documents.insert(id.clone(), updated);

        Ok(Solution {
            version: self.version + 1,
            documents: Arc::new(documents),
        })
    }

    /// Ids of documents whose text in `other` differs from this solution.
    ///
    /// Documents missing from either side are ignored.
    pub fn changed_documents(&self, other: &Solution) -> Vec<DocumentId> {
        self.documents
            .iter()
            .filter_map(|(id, doc)| {
                let theirs = other.documents.get(id)?;
                (!doc.text().content_equals(theirs.text())).then(|| id.clone())
            })
            .collect()
    }

    /// True when both values share the same document storage.
    pub fn ptr_eq(&self, other: &Solution) -> bool {
        Arc::ptr_eq(&self.documents, &other.documents)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
