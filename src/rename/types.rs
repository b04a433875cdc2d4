use std::path::PathBuf;

/// A single pending rename, produced by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameCandidate {
    /// Full path of the entry as found during the scan
    pub original_path: PathBuf,
    /// Base name as found during the scan
    pub original_name: String,
    /// Full path the entry will be renamed to
    pub proposed_path: PathBuf,
    /// Sanitized base name
    pub proposed_name: String,
}

impl RenameCandidate {
    pub fn new(original_path: PathBuf, proposed_name: String) -> Self {
        let original_name = original_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let proposed_path = original_path
            .parent()
            .map(|p| p.join(&proposed_name))
            .unwrap_or_else(|| PathBuf::from(&proposed_name));

        Self {
            original_path,
            original_name,
            proposed_path,
            proposed_name,
        }
    }
}

/// Files and directories to rename, each in discovery order
#[derive(Debug, Clone, Default)]
pub struct RenamePlan {
    pub files: Vec<RenameCandidate>,
    pub directories: Vec<RenameCandidate>,
}

impl RenamePlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, candidate: RenameCandidate) {
        self.files.push(candidate);
    }

    pub fn add_directory(&mut self, candidate: RenameCandidate) {
        self.directories.push(candidate);
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.directories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len() + self.directories.len()
    }

    /// Candidates in the order they must be applied.
    ///
    /// Files come first in discovery order, then directories deepest first.
    /// Every candidate path was computed against the original tree, so a
    /// directory can only move once nothing below it is still pending.
    pub fn execution_order(&self) -> impl Iterator<Item = &RenameCandidate> {
        self.files.iter().chain(self.directories.iter().rev())
    }

    pub fn clear(&mut self) {
        self.files.clear();
        self.directories.clear();
    }
}

/// Counts of what an execution pass processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionSummary {
    pub files: usize,
    pub directories: usize,
    pub dry_run: bool,
}

impl ExecutionSummary {
    pub fn new(dry_run: bool) -> Self {
        Self {
            files: 0,
            directories: 0,
            dry_run,
        }
    }

    pub fn total(&self) -> usize {
        self.files + self.directories
    }
}
