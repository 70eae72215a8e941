//! Graph-construction error type.

use thiserror::Error;

use af_core::RoomId;

/// Errors produced while building a [`Colony`](crate::Colony).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColonyError {
    #[error("duplicate room name {0:?}")]
    DuplicateRoom(String),

    #[error("invalid room name {0:?}")]
    InvalidRoomName(String),

    #[error("multiple start rooms defined ({existing:?} and {new:?})")]
    MultipleStart { existing: String, new: String },

    #[error("multiple end rooms defined ({existing:?} and {new:?})")]
    MultipleEnd { existing: String, new: String },

    #[error("room {0:?} does not exist")]
    UnknownRoom(String),

    #[error("room {0} not found in colony")]
    RoomNotFound(RoomId),

    #[error("tunnel from {0:?} to itself")]
    SelfLoop(String),

    #[error("duplicate tunnel {a:?}-{b:?}")]
    DuplicateTunnel { a: String, b: String },

    #[error("no start room found")]
    MissingStart,

    #[error("no end room found")]
    MissingEnd,
}

pub type ColonyResult<T> = Result<T, ColonyError>;
