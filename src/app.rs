//! One complete run: scan, confirm, execute.

use std::io::BufRead;
use tracing::info;

use crate::config::RunOptions;
use crate::confirm::{auto_confirm, confirm};
use crate::error::AppError;
use crate::output::Console;
use crate::rename::{execute, ExecutionSummary};
use crate::scanner::Scanner;

/// How a run ended when nothing went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every name already satisfied the policy
    NothingToRename,
    /// The user did not confirm
    Declined,
    /// The plan ran to the end
    Executed(ExecutionSummary),
}

pub fn run(
    options: &RunOptions,
    input: &mut impl BufRead,
    console: &mut Console,
) -> Result<Outcome, AppError> {
    let root = &options.root;

    info!(root = ?root, dry_run = options.dry_run, "Scanning for invalid names");
    let mut plan = Scanner::new(options.scan_options()).scan(root, console)?;

    if plan.is_empty() {
        info!("No invalid names found");
        console.nothing_to_rename();
        return Ok(Outcome::NothingToRename);
    }

    info!(
        files = plan.files.len(),
        directories = plan.directories.len(),
        "Found entries to rename"
    );

    let confirmed = if options.assume_yes {
        auto_confirm(options.dry_run, console)
    } else {
        confirm(options.dry_run, input, console)
    };

    if !confirmed {
        info!("Rename declined");
        console.declined();
        return Ok(Outcome::Declined);
    }

    let summary = execute(&mut plan, &options.rename_options(), console)?;

    info!(
        files = summary.files,
        directories = summary.directories,
        dry_run = summary.dry_run,
        "Rename complete"
    );

    Ok(Outcome::Executed(summary))
}
