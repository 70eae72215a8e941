//! `TranscriptObserver<W>`: bridges `SimObserver` to a `TranscriptWriter`.

use af_colony::Colony;
use af_core::Turn;
use af_sim::{AntStore, Move, SimObserver};

use crate::row::rows;
use crate::writer::TranscriptWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams every turn to a [`TranscriptWriter`] as
/// the simulation runs.
///
/// Errors from the writer are stored because `SimObserver` methods return
/// nothing.  Check [`take_error`][Self::take_error] after `sim.run()`.
pub struct TranscriptObserver<'c, W: TranscriptWriter> {
    writer:     W,
    colony:     &'c Colony,
    last_error: Option<OutputError>,
}

impl<'c, W: TranscriptWriter> TranscriptObserver<'c, W> {
    pub fn new(writer: W, colony: &'c Colony) -> Self {
        Self { writer, colony, last_error: None }
    }

    /// The first write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TranscriptWriter> SimObserver for TranscriptObserver<'_, W> {
    fn on_turn_end(&mut self, turn: Turn, moves: &[Move], _ants: &AntStore) {
        let result = self.writer.write_turn(turn, &rows(turn, moves, self.colony));
        self.store_err(result);
    }

    fn on_run_end(&mut self, _last_turn: Turn) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
