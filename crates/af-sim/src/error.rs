use af_core::{AntId, CoreError, Turn};
use thiserror::Error;

/// Terminal simulation failures.  No transcript is produced with any of them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("no valid path found between start and end")]
    NoPath,

    #[error("no ants to move")]
    NoAgents,

    #[error("internal invariant violated: {0}")]
    InvariantViolation(#[from] Violation),
}

/// Broken simulation state.  Each variant points at a defect in an earlier
/// stage, not at bad input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("selected path {path} is not a simple start-to-end path")]
    InvalidPath { path: usize },

    #[error("ant {ant} has no assigned path")]
    MissingPath { ant: AntId },

    #[error("ant {ant} has no current room")]
    MissingRoom { ant: AntId },

    #[error("ant {ant} is past the end of its path")]
    CursorOutOfRange { ant: AntId },

    #[error("no ant moved in {turn} with {waiting} ants still on the way")]
    Stalled { turn: Turn, waiting: usize },

    #[error("simulation exceeded {limit} turns")]
    TurnLimitExceeded { limit: usize },
}

pub type SimResult<T> = Result<T, SimError>;
