//! Data models for integration paths, catalogue records, and rewrite outcomes

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A filesystem entry an integration test depends on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegPath {
    pub path: PathBuf,
    /// `true` when the entry must be duplicated into the destination tree,
    /// `false` when it is only referenced in place.
    pub copy: bool,
}

impl IntegPath {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, copy: bool) -> Self {
        Self {
            path: path.into(),
            copy,
        }
    }
}

/// Hand-maintained auxiliary path, relative to the scan root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraPath {
    pub path: &'static str,
    pub copy: bool,
}

impl ExtraPath {
    /// Entry written as a bare path; these are always copied.
    #[must_use]
    pub const fn bare(path: &'static str) -> Self {
        Self { path, copy: true }
    }

    #[must_use]
    pub const fn with_copy(path: &'static str, copy: bool) -> Self {
        Self { path, copy }
    }

    /// Resolve against the scan root.
    #[must_use]
    pub fn resolve(&self, root: &Path) -> IntegPath {
        IntegPath::new(root.join(self.path), self.copy)
    }
}

/// Outcome of rewriting a single file in place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    pub path: String,
    pub module: String,
    pub lines: usize,
    pub changed: usize,
}
