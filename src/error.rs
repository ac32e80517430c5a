use std::path::PathBuf;
use thiserror::Error;

/// Failure taxonomy for navigation operations. Expected outcomes like
/// "no matches" or "user cancelled" are not errors; they live in the
/// result enums of the resolve/jump operations.
#[derive(Error, Debug)]
pub enum NavError {
    #[error("no index found under {0}, run `tagnav update` first")]
    IndexNotFound(PathBuf),

    #[error("history is empty")]
    HistoryEmpty,

    #[error("{0}")]
    MissingContext(&'static str),

    #[error("history file {path}: {message}")]
    Storage { path: PathBuf, message: String },

    #[error("indexer query failed: {0}")]
    Query(String),
}

impl NavError {
    pub fn storage(path: &std::path::Path, err: impl std::fmt::Display) -> Self {
        NavError::Storage {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Conditions reported as plain informational messages rather than
    /// failures: first-ever back-jump on an empty history.
    pub fn is_informational(&self) -> bool {
        matches!(self, NavError::HistoryEmpty)
    }
}

pub type NavResult<T> = Result<T, NavError>;
