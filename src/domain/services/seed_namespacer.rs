//! Seed namespacer - adds `namespace Database\Seeders;` to published seeders
//!
//! Only projects using the `database/seeders` layout need it; for the legacy
//! `database/seeds` layout the whole batch is a no-op.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::domain::ports::{FileError, FileSystem};
use crate::domain::value_objects::SeedFolder;

/// Namespace required by the `database/seeders` layout
pub const SEEDERS_NAMESPACE: &str = r"Database\Seeders";

// `<?php`, then zero or one blank line, then a `use` import.
fn boilerplate_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\A<\?php(\r?\n)(?:\r?\n)?use ").expect("static regex is valid"))
}

/// Insert the namespace declaration between the opening tag and the first
/// `use`, or `None` when the file does not have that shape (already
/// namespaced, or a different layout).
pub fn add_namespace(content: &str) -> Option<String> {
    let re = boilerplate_re();
    if !re.is_match(content) {
        return None;
    }
    let patched = re.replacen(content, 1, |caps: &Captures<'_>| {
        let nl = &caps[1];
        format!("<?php{nl}{nl}namespace {SEEDERS_NAMESPACE};{nl}{nl}use ")
    });
    Some(patched.into_owned())
}

/// A seed file rewrite that has not been written yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRewrite {
    pub path: PathBuf,
    pub before: String,
    pub after: String,
}

pub struct SeedNamespacer<'a> {
    fs: &'a dyn FileSystem,
    folder: SeedFolder,
    seed_dir: PathBuf,
}

impl<'a> SeedNamespacer<'a> {
    pub fn new(fs: &'a dyn FileSystem, folder: SeedFolder, project_root: &Path) -> Self {
        Self {
            fs,
            folder,
            seed_dir: folder.path_in(project_root),
        }
    }

    /// Namespace the project copies of `published` seed files.
    ///
    /// `published` are the package's template paths; only their file names
    /// are used to locate the copies in the project seed directory. Returns
    /// the number of files rewritten.
    pub fn namespace_if_needed(&self, published: &[PathBuf]) -> Result<usize, FileError> {
        if !self.folder.requires_namespace() {
            debug!(folder = %self.folder, "seed folder is not namespaced, skipping");
            return Ok(0);
        }

        let mut rewritten = 0;
        for file in published {
            let Some(name) = file.file_name() else {
                continue;
            };
            let path = self.seed_dir.join(name);
            let content = self.fs.read(&path)?;
            if let Some(patched) = add_namespace(&content) {
                self.fs.write(&path, &patched)?;
                debug!(path = %path.display(), "namespace added");
                rewritten += 1;
            }
        }
        Ok(rewritten)
    }

    /// Rewrites `namespace_if_needed` would make, without writing.
    ///
    /// Copies that do not exist yet are left out: in a dry run they have not
    /// been published.
    pub fn preview(&self, published: &[PathBuf]) -> Result<Vec<PendingRewrite>, FileError> {
        if !self.folder.requires_namespace() {
            return Ok(Vec::new());
        }

        let mut pending = Vec::new();
        for name in published.iter().filter_map(|f| f.file_name()) {
            let path = self.seed_dir.join(name);
            if !self.fs.exists(&path) {
                continue;
            }
            let before = self.fs.read(&path)?;
            if let Some(after) = add_namespace(&before) {
                pending.push(PendingRewrite {
                    path,
                    before,
                    after,
                });
            }
        }
        Ok(pending)
    }
}
