use std::path::PathBuf;

use crate::rename::RenameOptions;
use crate::scanner::ScanOptions;

/// Everything a single run needs, resolved from the command line
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub root: PathBuf,
    pub dry_run: bool,
    /// Skip reading the confirmation from input
    pub assume_yes: bool,
    pub skip_unreadable: bool,
    pub overwrite: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            dry_run: false,
            assume_yes: false,
            skip_unreadable: false,
            overwrite: false,
        }
    }
}

impl RunOptions {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            skip_unreadable: self.skip_unreadable,
        }
    }

    pub fn rename_options(&self) -> RenameOptions {
        RenameOptions {
            dry_run: self.dry_run,
            overwrite: self.overwrite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_options_default() {
        let options = RunOptions::default();
        assert_eq!(options.root, PathBuf::from("."));
        assert!(!options.dry_run);
        assert!(!options.assume_yes);
    }

    #[test]
    fn test_derived_options() {
        let options = RunOptions {
            dry_run: true,
            skip_unreadable: true,
            overwrite: true,
            ..Default::default()
        };

        assert!(options.scan_options().skip_unreadable);

        let rename = options.rename_options();
        assert!(rename.dry_run);
        assert!(rename.overwrite);
    }
}
