// src/error.rs
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CostarError {
    #[error("failed to load dataset: {reason} (path: {path})")]
    DataLoad { reason: String, path: PathBuf },

    #[error("no person found for '{query}'")]
    NotFound { query: String },

    #[error("search exceeded its budget of {budget:?}")]
    Timeout { budget: Duration },

    #[error("pop on an empty frontier")]
    EmptyFrontier,
}

pub type Result<T> = std::result::Result<T, CostarError>;

// Allow `?` on std::io::Error during load by converting to DataLoad with unknown path.
impl From<std::io::Error> for CostarError {
    fn from(source: std::io::Error) -> Self {
        CostarError::DataLoad {
            reason: source.to_string(),
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert CSV reader errors
impl From<csv::Error> for CostarError {
    fn from(e: csv::Error) -> Self {
        CostarError::DataLoad {
            reason: e.to_string(),
            path: PathBuf::from("<unknown>"),
        }
    }
}
