mod executor;
mod types;

pub use executor::{execute, RenameError, RenameOptions};
pub use types::{ExecutionSummary, RenameCandidate, RenamePlan};
