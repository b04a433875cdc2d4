pub mod app;
pub mod cli;
pub mod config;
pub mod confirm;
pub mod error;
pub mod logging;
pub mod output;
pub mod policy;
pub mod rename;
pub mod scanner;

pub use app::{run, Outcome};
pub use config::RunOptions;
pub use error::{AppError, ExitCode};
pub use output::Console;
pub use policy::{is_valid_name, sanitize_name};
pub use rename::{execute, ExecutionSummary, RenameCandidate, RenameError, RenameOptions, RenamePlan};
pub use scanner::{scan, ScanOptions, Scanner, ScannerError};
