//! The `Sim` struct and its turn loop.

use tracing::{debug, trace};

use af_colony::{Colony, Path};
use af_core::{AntId, DirectTunnel, FarmConfig, Turn};

use crate::{
    AntStore, Assignment, Move, Occupancy, SimObserver, SimResult, Transcript, Violation,
};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// Moves every ant along its assigned path, one room per turn at most.
///
/// Each turn:
///
/// 1. Clear the occupancy marks.
/// 2. Visit ants in ascending id order.  An ant that has not arrived moves
///    to the next room on its path if that room is the end room or is not
///    marked.  A move vacates the current interior room, marks the next
///    interior room and emits a [`Move`].
/// 3. A room vacated earlier in the turn may be entered by a later ant in
///    the same turn.
///
/// The loop ends when every ant has arrived.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<'c> {
    pub config: FarmConfig,

    /// Selected interior-disjoint paths, in selection order.
    pub paths: Vec<Path>,

    pub assignment: Assignment,

    pub ants: AntStore,

    colony: &'c Colony,
}

impl<'c> Sim<'c> {
    pub(crate) fn new(
        colony:     &'c Colony,
        config:     FarmConfig,
        paths:      Vec<Path>,
        assignment: Assignment,
    ) -> Self {
        let ants = AntStore::new(&assignment, &paths);
        Self { config, paths, assignment, ants, colony }
    }

    pub fn colony(&self) -> &'c Colony {
        self.colony
    }

    /// Upper bound on the number of turns: every turn moves at least one ant.
    pub fn turn_limit(&self) -> usize {
        self.assignment.total_moves(&self.paths)
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every ant has arrived and return the transcript.
    ///
    /// # Errors
    ///
    /// [`SimError::InvariantViolation`][crate::SimError::InvariantViolation]
    /// when the ant state is inconsistent, a turn moves no ant, or the run
    /// takes more than [`turn_limit`](Self::turn_limit) turns.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Transcript> {
        let limit          = self.turn_limit();
        let mut occupancy  = Occupancy::new(self.colony.room_count());
        let mut transcript = Transcript::default();
        let mut turn       = Turn::ZERO;

        while !self.ants.all_arrived() {
            turn = turn.next();
            if turn.count() > limit {
                return Err(Violation::TurnLimitExceeded { limit }.into());
            }

            observer.on_turn_start(turn);
            let (next, moves) = self.step(turn, occupancy)?;
            occupancy = next;

            if moves.is_empty() {
                let waiting = self.ants.count - self.ants.arrived_count();
                return Err(Violation::Stalled { turn, waiting }.into());
            }

            observer.on_turn_end(turn, &moves, &self.ants);
            transcript.turns.push(moves);
        }

        observer.on_run_end(turn);
        debug!(
            ants = self.ants.count,
            paths = self.paths.len(),
            turns = transcript.turn_count(),
            moves = transcript.move_count(),
            "simulation finished"
        );
        Ok(transcript)
    }

    /// Play one turn.
    ///
    /// Takes the occupancy map by value, clears it, and returns it with the
    /// marks left by this turn's moves, together with the moves in
    /// ascending ant order.
    pub fn step(
        &mut self,
        turn:          Turn,
        mut occupancy: Occupancy,
    ) -> SimResult<(Occupancy, Vec<Move>)> {
        occupancy.clear();
        let colony          = self.colony;
        let mut moves       = Vec::new();
        let mut direct_used = false;
        let mut run_len     = 0usize;

        for i in 0..self.ants.count {
            run_len += 1;
            if self.ants.arrived[i] {
                run_len = 0;
                continue;
            }
            let ant = AntId(i as u32);

            let path = self
                .paths
                .get(self.ants.path[i])
                .ok_or(Violation::MissingPath { ant })?;
            let here = self.ants.room[i];
            if !here.is_valid() || here.index() >= colony.room_count() {
                return Err(Violation::MissingRoom { ant }.into());
            }
            let Some(&next) = path.rooms.get(self.ants.cursor[i] + 1) else {
                return Err(Violation::CursorOutOfRange { ant }.into());
            };

            let to_end = colony.is_end(next);
            let direct = to_end && colony.is_start(here);
            let held = match self.config.direct_tunnel {
                DirectTunnel::Single    => direct && direct_used,
                DirectTunnel::Unbounded => false,
                DirectTunnel::RunHead   => path.is_direct() && run_len > 1,
            };
            if held {
                continue;
            }
            if !to_end && !occupancy.is_free(next) {
                continue;
            }

            if colony.is_interior(here) {
                occupancy.vacate(here);
            }
            if colony.is_interior(next) {
                occupancy.claim(next, ant);
            }
            direct_used |= direct;
            self.ants.advance(ant, next, to_end);
            moves.push(Move { ant, room: next });
        }

        trace!(%turn, moves = moves.len(), occupied = occupancy.occupied(), "turn done");
        Ok((occupancy, moves))
    }
}
