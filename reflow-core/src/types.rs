//! Domain types for document snapshots.
//!
//! Every value here is immutable once built. Clones are cheap: text and paths
//! are reference-counted, so a clone shares storage with its source.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A stable identifier for a document inside a [`crate::Solution`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Immutable text content of a document.
#[derive(Debug, Clone)]
pub struct TextSnapshot(Arc<str>);

impl TextSnapshot {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact content comparison.
    pub fn content_equals(&self, other: &TextSnapshot) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }

    /// True when both snapshots share the same storage.
    pub fn ptr_eq(&self, other: &TextSnapshot) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for TextSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.content_equals(other)
    }
}

impl Eq for TextSnapshot {}

impl fmt::Display for TextSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TextSnapshot {
    fn from(s: &str) -> Self {
        Self(Arc::from(s))
    }
}

impl From<String> for TextSnapshot {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl AsRef<str> for TextSnapshot {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// A named unit of text content within a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    id: DocumentId,
    path: Arc<Path>,
    text: TextSnapshot,
}

impl Document {
    pub fn new(
        id: impl Into<DocumentId>,
        path: impl Into<PathBuf>,
        text: impl Into<TextSnapshot>,
    ) -> Self {
        let path: PathBuf = path.into();
        Self {
            id: id.into(),
            path: Arc::from(path),
            text: text.into(),
        }
    }

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &TextSnapshot {
        &self.text
    }

    /// File name with the directory stripped; the full path when there is none.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// A copy of this document carrying `text`. Identity and path are shared.
    pub fn with_text(&self, text: impl Into<TextSnapshot>) -> Self {
        Self {
            id: self.id.clone(),
            path: Arc::clone(&self.path),
            text: text.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
