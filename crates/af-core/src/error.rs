//! Core error type.
//!
//! Sub-crates define their own error enums; this one only covers what
//! `af-core` itself can reject, which is configuration.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `af-core`.
pub type CoreResult<T> = Result<T, CoreError>;
