use clap::Parser;
use std::path::PathBuf;
use tracing::warn;

use crate::config::RunOptions;

#[derive(Parser, Debug)]
#[command(name = "namefix")]
#[command(author, version, long_about = None)]
#[command(about = "Rename files and directories whose names contain unsafe characters")]
pub struct Args {
    /// Root directory to scan (takes precedence over --root)
    #[arg(value_name = "ROOT")]
    pub path: Option<PathBuf>,

    /// Root directory to scan
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Preview changes without making them
    #[arg(long)]
    pub dry_run: bool,

    /// Answer the confirmation prompt with yes
    #[arg(short, long)]
    pub yes: bool,

    /// Report entries that cannot be read and keep scanning
    #[arg(long)]
    pub skip_unreadable: bool,

    /// Allow a rename to replace an existing entry
    #[arg(long)]
    pub overwrite: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The root to scan: positional path, then --root, then "."
    pub fn root(&self) -> PathBuf {
        if let (Some(path), Some(root)) = (&self.path, &self.root) {
            if path != root {
                warn!(
                    "Both a root argument and --root were given; using {}",
                    path.display()
                );
            }
        }

        self.path
            .clone()
            .or_else(|| self.root.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn options(&self) -> RunOptions {
        RunOptions {
            root: self.root(),
            dry_run: self.dry_run,
            assume_yes: self.yes,
            skip_unreadable: self.skip_unreadable,
            overwrite: self.overwrite,
        }
    }
}
