use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

use crate::output::Console;

use super::types::{ExecutionSummary, RenameCandidate, RenamePlan};

/// Errors that stop a live rename pass
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("Failed to rename '{}' to '{}': {source}", .from.display(), .to.display())]
    Io {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Destination already exists: {}", .to.display())]
    DestinationExists { from: PathBuf, to: PathBuf },

    #[error("Sanitized name of '{}' is empty", .from.display())]
    EmptyName { from: PathBuf, to: PathBuf },

    #[error("Sanitized name of '{}' is a relative directory reference", .from.display())]
    ReservedName { from: PathBuf, to: PathBuf },
}

impl RenameError {
    pub fn from_path(&self) -> &PathBuf {
        match self {
            RenameError::Io { from, .. }
            | RenameError::DestinationExists { from, .. }
            | RenameError::EmptyName { from, .. }
            | RenameError::ReservedName { from, .. } => from,
        }
    }

    pub fn to_path(&self) -> &PathBuf {
        match self {
            RenameError::Io { to, .. }
            | RenameError::DestinationExists { to, .. }
            | RenameError::EmptyName { to, .. }
            | RenameError::ReservedName { to, .. } => to,
        }
    }

    /// The underlying reason, without the paths
    pub fn cause(&self) -> String {
        match self {
            RenameError::Io { source, .. } => source.to_string(),
            RenameError::DestinationExists { .. } => "destination already exists".to_string(),
            RenameError::EmptyName { .. } => "sanitized name is empty".to_string(),
            RenameError::ReservedName { .. } => "sanitized name is \".\" or \"..\"".to_string(),
        }
    }
}

/// Options for an execution pass
#[derive(Debug, Clone, Default)]
pub struct RenameOptions {
    pub dry_run: bool,
    /// Let the rename replace an existing destination
    pub overwrite: bool,
}

/// Apply every candidate of the plan, files first and directories deepest first.
///
/// The first failure aborts the pass; renames already done stay done. A plan
/// that runs to the end is cleared.
pub fn execute(
    plan: &mut RenamePlan,
    options: &RenameOptions,
    console: &mut Console,
) -> Result<ExecutionSummary, RenameError> {
    let mut summary = ExecutionSummary::new(options.dry_run);

    info!(
        files = plan.files.len(),
        directories = plan.directories.len(),
        dry_run = options.dry_run,
        "Executing rename plan"
    );

    let file_count = plan.files.len();

    for (i, candidate) in plan.execution_order().enumerate() {
        apply(candidate, options, console)?;
        if i < file_count {
            summary.files += 1;
        } else {
            summary.directories += 1;
        }
    }

    plan.clear();

    debug!(total = summary.total(), "Rename plan finished");

    Ok(summary)
}

fn apply(
    candidate: &RenameCandidate,
    options: &RenameOptions,
    console: &mut Console,
) -> Result<(), RenameError> {
    if options.dry_run {
        console.would_rename(&candidate.original_path, &candidate.proposed_path);
        return Ok(());
    }

    if let Err(e) = rename(candidate, options.overwrite) {
        debug!(
            from = ?candidate.original_path,
            to = ?candidate.proposed_path,
            "{}",
            e
        );
        console.rename_failed(&candidate.original_path, &candidate.proposed_path, &e.cause());
        return Err(e);
    }

    console.renamed(&candidate.original_path, &candidate.proposed_path);
    Ok(())
}

fn rename(candidate: &RenameCandidate, overwrite: bool) -> Result<(), RenameError> {
    let from = &candidate.original_path;
    let to = &candidate.proposed_path;

    if candidate.proposed_name.is_empty() {
        return Err(RenameError::EmptyName {
            from: from.clone(),
            to: to.clone(),
        });
    }

    // "." and ".." would point at the parent or grandparent, not a new entry
    if matches!(candidate.proposed_name.as_str(), "." | "..") {
        return Err(RenameError::ReservedName {
            from: from.clone(),
            to: to.clone(),
        });
    }

    // symlink_metadata so a dangling link still counts as taken
    if !overwrite && fs::symlink_metadata(to).is_ok() {
        return Err(RenameError::DestinationExists {
            from: from.clone(),
            to: to.clone(),
        });
    }

    debug!(from = ?from, to = ?to, "Renaming");

    fs::rename(from, to).map_err(|e| RenameError::Io {
        from: from.clone(),
        to: to.clone(),
        source: e,
    })
}
