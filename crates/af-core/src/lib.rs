//! `af-core`: foundational types for the `antfarm` workspace.
//!
//! This crate is a dependency of every other `af-*` crate.  It has no `af-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `RoomId`, `AntId`                                      |
//! | [`turn`]     | `Turn`                                                 |
//! | [`config`]   | `FarmConfig`, `SelectionStrategy`, `DirectTunnel`      |
//! | [`error`]    | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod turn;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DirectTunnel, FarmConfig, SelectionStrategy};
pub use error::{CoreError, CoreResult};
pub use ids::{AntId, RoomId};
pub use turn::Turn;
