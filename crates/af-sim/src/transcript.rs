//! Move records and the rendered transcript.
//!
//! One transcript line per turn, tokens `<prefix><ant>-<room>` separated by
//! single spaces in ascending ant order, every line terminated by `\n`:
//!
//! ```text
//! L1-mid
//! L1-end L2-mid
//! L2-end
//! ```

use af_colony::Colony;
use af_core::{AntId, RoomId, Turn};

/// One ant entering one room.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub ant:  AntId,
    pub room: RoomId,
}

impl Move {
    /// The `L3-room` token for this move.
    pub fn token(&self, colony: &Colony, prefix: &str) -> String {
        format!("{prefix}{}-{}", self.ant.label(), colony.name(self.room))
    }
}

/// All moves of a finished run, grouped by turn.  `turns[0]` is turn 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transcript {
    pub turns: Vec<Vec<Move>>,
}

impl Transcript {
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    pub fn move_count(&self) -> usize {
        self.turns.iter().map(Vec::len).sum()
    }

    /// `(turn, moves)` pairs starting at turn 1.
    pub fn iter(&self) -> impl Iterator<Item = (Turn, &[Move])> + '_ {
        self.turns
            .iter()
            .enumerate()
            .map(|(i, moves)| (Turn(i as u32 + 1), moves.as_slice()))
    }

    /// One turn as a line, without the trailing newline.
    pub fn render_line(moves: &[Move], colony: &Colony, prefix: &str) -> String {
        moves
            .iter()
            .map(|m| m.token(colony, prefix))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The full transcript text.
    pub fn render(&self, colony: &Colony, prefix: &str) -> String {
        let mut out = String::new();
        for moves in &self.turns {
            out.push_str(&Self::render_line(moves, colony, prefix));
            out.push('\n');
        }
        out
    }
}
