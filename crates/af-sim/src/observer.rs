//! Simulation observer trait for progress reporting and data collection.

use af_core::Turn;

use crate::{AntStore, Move};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] around every turn.
///
/// All methods default to no-ops.
///
/// # Example: move counter
///
/// ```rust,ignore
/// struct MoveCounter(usize);
///
/// impl SimObserver for MoveCounter {
///     fn on_turn_end(&mut self, _turn: Turn, moves: &[Move], _ants: &AntStore) {
///         self.0 += moves.len();
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before any ant moves in `turn`.
    fn on_turn_start(&mut self, _turn: Turn) {}

    /// Called after every ant has had its chance to move.
    ///
    /// `moves` is the turn's record list in ascending ant order; `ants` is
    /// the state at the turn boundary.
    fn on_turn_end(&mut self, _turn: Turn, _moves: &[Move], _ants: &AntStore) {}

    /// Called once after the last ant arrives.
    fn on_run_end(&mut self, _last_turn: Turn) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
