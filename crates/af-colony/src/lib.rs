//! `af-colony`: the room/tunnel graph and everything computed from it
//! before ants start moving.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`colony`]  | `Colony` (arena + CSR adjacency), `ColonyBuilder`          |
//! | [`paths`]   | `Path`, `enumerate_paths`                                  |
//! | [`select`]  | `PathSelector` trait, `GreedySeedSelector`, `ExhaustiveSelector` |
//! | [`error`]   | `ColonyError`, `ColonyResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Greedy selector seeds run on Rayon.                      |
//! | `fx-hash`  | FxHash for the name and tunnel indexes.                  |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.       |

pub mod colony;
pub mod error;
pub mod paths;
pub mod select;


pub use colony::{Colony, ColonyBuilder, Coord, RoomRole};
pub use error::{ColonyError, ColonyResult};
pub use paths::{enumerate_paths, Path};
pub use select::{ExhaustiveSelector, GreedySeedSelector, PathSelector};
