//! `af-loader`: reads a colony description and the ant count.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`loader`] | `GraphLoader`, `LoadedFarm`                               |
//! | [`error`]  | `LoadError`, `LoadResult<T>`                              |
//!
//! The loader only checks the format and the graph rules enforced by
//! [`af_colony::ColonyBuilder`].  Whether start and end are connected is
//! left to the simulator.

pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use error::{LoadError, LoadResult};
pub use loader::{GraphLoader, LoadedFarm};
