//! The `TranscriptWriter` trait implemented by all backend writers.

use af_colony::Colony;
use af_core::Turn;
use af_sim::Transcript;

use crate::row::rows;
use crate::{MoveRow, OutputResult};

/// Trait implemented by the text and CSV writers.
pub trait TranscriptWriter {
    /// Write one turn.  `rows` is in ascending ant order and never empty
    /// for a finished run.
    fn write_turn(&mut self, turn: Turn, rows: &[MoveRow<'_>]) -> OutputResult<()>;

    /// Flush the underlying sink.
    ///
    /// Idempotent, safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write a whole transcript, then call `finish`.
pub fn write_transcript<W: TranscriptWriter + ?Sized>(
    writer:     &mut W,
    transcript: &Transcript,
    colony:     &Colony,
) -> OutputResult<()> {
    for (turn, moves) in transcript.iter() {
        writer.write_turn(turn, &rows(turn, moves, colony))?;
    }
    writer.finish()
}
