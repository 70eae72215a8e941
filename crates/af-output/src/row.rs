//! Flat move rows handed to writers.

use af_colony::Colony;
use af_core::Turn;
use af_sim::Move;

/// One move with ids resolved to what gets printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRow<'a> {
    pub turn: u32,
    /// 1-based ant number.
    pub ant:  u32,
    pub room: &'a str,
}

impl MoveRow<'_> {
    /// `<prefix><ant>-<room>`, e.g. `L3-mid`.
    pub fn token(&self, prefix: &str) -> String {
        format!("{prefix}{}-{}", self.ant, self.room)
    }
}

/// Resolve one turn's moves against `colony`, keeping their order.
pub fn rows<'a>(turn: Turn, moves: &[Move], colony: &'a Colony) -> Vec<MoveRow<'a>> {
    moves
        .iter()
        .map(|m| MoveRow {
            turn: turn.0,
            ant:  m.ant.label(),
            room: colony.name(m.room),
        })
        .collect()
}
