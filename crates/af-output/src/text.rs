//! Verbatim transcript text.

use std::io::Write;

use af_core::Turn;

use crate::writer::TranscriptWriter;
use crate::{MoveRow, OutputResult};

/// Writes one line per turn: move tokens separated by single spaces,
/// terminated by `\n`.
pub struct TextWriter<W: Write> {
    out:    W,
    prefix: String,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W, prefix: impl Into<String>) -> Self {
        Self { out, prefix: prefix.into() }
    }

    /// Unwrap the inner sink.  Call [`finish`](TranscriptWriter::finish) first.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TranscriptWriter for TextWriter<W> {
    fn write_turn(&mut self, _turn: Turn, rows: &[MoveRow<'_>]) -> OutputResult<()> {
        let line = rows
            .iter()
            .map(|r| r.token(&self.prefix))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
