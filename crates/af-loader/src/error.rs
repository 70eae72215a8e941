use thiserror::Error;

use af_colony::ColonyError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid data format, empty file")]
    Empty,

    /// A single line is malformed or breaks a graph rule.  `line` is 1-based.
    #[error("invalid data format, line {line}: {reason}")]
    Format { line: usize, reason: String },

    /// The file as a whole is incomplete (no start or no end room).
    #[error("invalid data format, {0}")]
    Colony(#[from] ColonyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    pub(crate) fn at(line: usize, reason: impl Into<String>) -> Self {
        LoadError::Format { line, reason: reason.into() }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;
