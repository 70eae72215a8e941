//! `af-sim`: ant assignment and the turn loop for the antfarm workspace.
//!
//! # Turn loop
//!
//! ```text
//! build:  enumerate paths → select disjoint set → assign ants
//! run:    for turn in 1..:
//!           ① clear occupancy
//!           ② each unarrived ant, ascending id: move if the next room is
//!              the end room or unmarked
//!           ③ stop when every ant has arrived
//! ```
//!
//! | Module         | Contents                                         |
//! |----------------|--------------------------------------------------|
//! | [`assign`]     | `assign_ants`, `Assignment`                      |
//! | [`ants`]       | `AntStore`, `AntPhase`                           |
//! | [`occupancy`]  | `Occupancy`                                      |
//! | [`sim`]        | `Sim`                                            |
//! | [`builder`]    | `SimBuilder`                                     |
//! | [`observer`]   | `SimObserver`, `NoopObserver`                    |
//! | [`transcript`] | `Move`, `Transcript`                             |
//!
//! # Quick-start
//!
//! ```
//! use af_colony::{ColonyBuilder, Coord, RoomRole};
//! use af_core::FarmConfig;
//!
//! let mut b = ColonyBuilder::new();
//! let s = b.add_room("s", Coord::new(0, 0), RoomRole::Start).unwrap();
//! let e = b.add_room("e", Coord::new(1, 0), RoomRole::End).unwrap();
//! b.add_tunnel(s, e).unwrap();
//! let colony = b.build().unwrap();
//!
//! let transcript = af_sim::solve(&colony, 1, &FarmConfig::default()).unwrap();
//! assert_eq!(transcript.render(&colony, "L"), "L1-e\n");
//! ```

pub mod ants;
pub mod assign;
pub mod builder;
pub mod error;
pub mod observer;
pub mod occupancy;
pub mod sim;
pub mod transcript;


pub use ants::{AntPhase, AntStore};
pub use assign::{assign_ants, Assignment};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult, Violation};
pub use observer::{NoopObserver, SimObserver};
pub use occupancy::Occupancy;
pub use sim::Sim;
pub use transcript::{Move, Transcript};

use af_colony::Colony;
use af_core::FarmConfig;

/// Plan and run a whole simulation with the default observer.
pub fn solve(colony: &Colony, ant_count: u32, config: &FarmConfig) -> SimResult<Transcript> {
    SimBuilder::new(colony, ant_count, config.clone())
        .build()?
        .run(&mut NoopObserver)
}
