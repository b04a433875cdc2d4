mod codes;

pub use codes::ExitCode;

use crate::rename::RenameError;
use crate::scanner::ScannerError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Root directory does not exist: {}", .path.display())]
    RootNotFound { path: PathBuf },

    #[error("Error accessing {}: {message}", .path.display())]
    ScanError { path: PathBuf, message: String },

    #[error("Rename failed: {} -> {}", .from.display(), .to.display())]
    RenameError {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: RenameError,
    },
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::RootNotFound { .. } => ExitCode::RootNotFound,
            AppError::ScanError { .. } => ExitCode::ScanError,
            AppError::RenameError { .. } => ExitCode::RenameError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::RootNotFound { path } => {
                format!(
                    "Root directory does not exist:\n  {}\n\n\
                     Please verify the path and try again.",
                    path.display()
                )
            }

            AppError::ScanError { path, message } => {
                format!(
                    "Could not access an entry while scanning:\n  {}\n  {}\n\n\
                     Nothing was renamed. Fix the permissions or rerun with \
                     --skip-unreadable to ignore entries that cannot be read.",
                    path.display(),
                    message
                )
            }

            AppError::RenameError { from, to, source } => {
                format!(
                    "Failed to rename:\n\
                     From:  {}\n\
                     To:    {}\n\
                     Error: {}\n\n\
                     Renames before this one were applied and are not undone; \
                     the remaining ones were skipped.",
                    from.display(),
                    to.display(),
                    source.cause()
                )
            }
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::RootNotFound(path) => AppError::RootNotFound { path },
            ScannerError::Walk { path, source } => AppError::ScanError {
                path,
                message: source
                    .io_error()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| source.to_string()),
            },
        }
    }
}

impl From<RenameError> for AppError {
    fn from(err: RenameError) -> Self {
        AppError::RenameError {
            from: err.from_path().clone(),
            to: err.to_path().clone(),
            source: err,
        }
    }
}
