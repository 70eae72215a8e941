//! Turn-scoped interior-room occupancy.

use af_core::{AntId, RoomId};

/// Which ant, if any, holds each room during the current turn.
///
/// Indexed by `RoomId`.  The simulator only records interior rooms; start
/// and end have unlimited capacity and never appear here.  Owned by value
/// and threaded through [`Sim::step`](crate::Sim::step) so each turn's
/// state change is explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    holder: Vec<Option<AntId>>,
}

impl Occupancy {
    pub fn new(room_count: usize) -> Self {
        Self { holder: vec![None; room_count] }
    }

    /// Forget every mark.  Called once at the start of a turn.
    pub fn clear(&mut self) {
        self.holder.fill(None);
    }

    #[inline]
    pub fn is_free(&self, room: RoomId) -> bool {
        self.holder(room).is_none()
    }

    pub fn holder(&self, room: RoomId) -> Option<AntId> {
        self.holder.get(room.index()).copied().flatten()
    }

    pub fn claim(&mut self, room: RoomId, ant: AntId) {
        self.holder[room.index()] = Some(ant);
    }

    pub fn vacate(&mut self, room: RoomId) {
        self.holder[room.index()] = None;
    }

    /// Number of marked rooms.
    pub fn occupied(&self) -> usize {
        self.holder.iter().filter(|h| h.is_some()).count()
    }
}
