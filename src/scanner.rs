use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

use crate::output::Console;
use crate::policy::{is_valid_name, sanitize_name};
use crate::rename::{RenameCandidate, RenamePlan};

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Root directory does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Cannot access {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Report unreadable entries and keep walking instead of failing
    pub skip_unreadable: bool,
}

/// Walks a tree and collects every entry whose name breaks the character policy
pub struct Scanner {
    options: ScanOptions,
    plan: RenamePlan,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Self {
        Self {
            options,
            plan: RenamePlan::new(),
        }
    }

    /// Walk `root` in pre-order, announcing each invalid name as it is found.
    ///
    /// Siblings are visited sorted by file name. Symlinks are not followed.
    pub fn scan(mut self, root: &Path, console: &mut Console) -> Result<RenamePlan, ScannerError> {
        debug!(path = ?root, "Scanning tree");

        if !root.exists() {
            return Err(ScannerError::RootNotFound(root.to_path_buf()));
        }

        let walker = WalkDir::new(root).follow_links(false).sort_by_file_name();

        for entry in walker {
            match entry {
                Ok(entry) => self.visit(&entry, console),
                Err(err) => self.walk_error(root, err, console)?,
            }
        }

        debug!(
            files = self.plan.files.len(),
            directories = self.plan.directories.len(),
            "Scan complete"
        );

        Ok(self.plan)
    }

    fn visit(&mut self, entry: &DirEntry, console: &mut Console) {
        let path = entry.path();

        // "/", "." and ".." have no name of their own to fix
        if entry.depth() == 0 && path.file_name().is_none() {
            trace!(path = ?path, "Skipping nameless root");
            return;
        }

        let name = entry.file_name().to_string_lossy();
        if is_valid_name(&name) {
            trace!(path = ?path, "Name is valid");
            return;
        }

        let sanitized = sanitize_name(&name);
        console.invalid_name(&name, &sanitized);

        let candidate = RenameCandidate::new(path.to_path_buf(), sanitized);

        if entry.file_type().is_dir() {
            debug!(path = ?path, to = %candidate.proposed_name, "Invalid directory name");
            self.plan.add_directory(candidate);
        } else {
            debug!(path = ?path, to = %candidate.proposed_name, "Invalid file name");
            self.plan.add_file(candidate);
        }
    }

    fn walk_error(
        &self,
        root: &Path,
        err: walkdir::Error,
        console: &mut Console,
    ) -> Result<(), ScannerError> {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf());

        if self.options.skip_unreadable {
            warn!(path = ?path, "Skipping unreadable entry: {}", err);
            // walkdir's own message repeats the path
            match err.io_error() {
                Some(io) => console.access_error(&path, io),
                None => console.access_error(&path, &err),
            }
            return Ok(());
        }

        Err(ScannerError::Walk { path, source: err })
    }
}

/// Scan `root` with the default fail-fast behaviour
pub fn scan(root: &Path, console: &mut Console) -> Result<RenamePlan, ScannerError> {
    Scanner::new(ScanOptions::default()).scan(root, console)
}
