//! Per-ant movement state in Structure-of-Arrays layout.

use af_colony::Path;
use af_core::{AntId, RoomId};

use crate::Assignment;

/// Where an ant is in its journey.
///
/// ```text
/// Waiting ──move──▶ InTransit ──move──▶ … ──move into end──▶ Arrived
///    └─────────── move into end (direct path) ──────────────────┘
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum AntPhase {
    /// At the start room, cursor 0.
    Waiting,
    /// In an interior room, `0 < cursor < length`.
    InTransit,
    /// In the end room.  Terminal.
    Arrived,
}

/// State of every ant, indexed by `AntId`.
///
/// Every `Vec` has exactly `count` elements.
#[derive(Debug, Clone)]
pub struct AntStore {
    pub count: usize,

    /// Index into the selected-path list.
    pub path: Vec<usize>,

    /// Position in the assigned path; `rooms[cursor] == room`.
    pub cursor: Vec<usize>,

    /// Current room.  `RoomId::INVALID` only in a corrupted store.
    pub room: Vec<RoomId>,

    pub arrived: Vec<bool>,
}

impl AntStore {
    /// Place every ant at the first room of its assigned path.
    pub fn new(assignment: &Assignment, paths: &[Path]) -> Self {
        let count = assignment.ant_count();
        let room = assignment
            .path_of
            .iter()
            .map(|&p| {
                paths
                    .get(p)
                    .and_then(|path| path.rooms.first().copied())
                    .unwrap_or(RoomId::INVALID)
            })
            .collect();
        Self {
            count,
            path:    assignment.path_of.clone(),
            cursor:  vec![0; count],
            room,
            arrived: vec![false; count],
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AntId`s in ascending order.
    pub fn ant_ids(&self) -> impl Iterator<Item = AntId> + '_ {
        (0..self.count as u32).map(AntId)
    }

    pub fn phase(&self, ant: AntId) -> AntPhase {
        let i = ant.index();
        if self.arrived[i] {
            AntPhase::Arrived
        } else if self.cursor[i] == 0 {
            AntPhase::Waiting
        } else {
            AntPhase::InTransit
        }
    }

    pub fn arrived_count(&self) -> usize {
        self.arrived.iter().filter(|&&a| a).count()
    }

    pub fn all_arrived(&self) -> bool {
        self.arrived.iter().all(|&a| a)
    }

    /// Record a move of `ant` one step along its path into `room`.
    pub(crate) fn advance(&mut self, ant: AntId, room: RoomId, reached_end: bool) {
        let i = ant.index();
        self.cursor[i] += 1;
        self.room[i]    = room;
        self.arrived[i] = reached_end;
    }
}
