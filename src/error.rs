use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading source documents or ranking candidates
#[derive(Debug, Error)]
pub enum RankerError {
    #[error("Source document not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Error reading {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid {entity} record (block {block}): field '{field}' expects {expected}, got {value:?}")]
    Validation {
        entity: &'static str,
        field: &'static str,
        expected: &'static str,
        value: String,
        block: usize,
    },

    #[error("Duplicate employer id: {0}")]
    DuplicateEmployerId(i64),

    #[error("Background task failed: {0}")]
    Blocking(String),
}

impl RankerError {
    /// Whether this error means a source document is missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, RankerError::SourceNotFound { .. })
    }
}
