//! PatchTarget entity - one declarative, idempotent text edit on a file
//!
//! The edit is described as data (match → replace, or append unless a
//! marker is present) so the mechanism behind it can change without touching
//! the call sites in the install use case.

use std::path::{Path, PathBuf};

/// How the file is edited
#[derive(Debug, Clone)]
pub enum PatchRule {
    /// Replace every occurrence of `find`; no-op when it does not occur
    Replace { find: String, replacement: String },
    /// Append `block` unless `marker` already occurs in the file
    AppendUnlessPresent { marker: String, block: String },
}

/// A (file, rule) pair
#[derive(Debug, Clone)]
pub struct PatchTarget {
    pub path: PathBuf,
    pub rule: PatchRule,
}

impl PatchTarget {
    pub fn replace(
        path: impl Into<PathBuf>,
        find: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            rule: PatchRule::Replace {
                find: find.into(),
                replacement: replacement.into(),
            },
        }
    }

    pub fn append_unless_present(
        path: impl Into<PathBuf>,
        marker: impl Into<String>,
        block: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            rule: PatchRule::AppendUnlessPresent {
                marker: marker.into(),
                block: block.into(),
            },
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Patched content, or `None` when the edit is already in place
    pub fn apply(&self, content: &str) -> Option<String> {
        let patched = match &self.rule {
            PatchRule::Replace { find, replacement } => {
                if find.is_empty() || !content.contains(find.as_str()) {
                    return None;
                }
                content.replace(find.as_str(), replacement)
            }
            PatchRule::AppendUnlessPresent { marker, block } => {
                if content.contains(marker.as_str()) {
                    return None;
                }
                format!("{content}{block}")
            }
        };

        (patched != content).then_some(patched)
    }
}
