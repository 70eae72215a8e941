//! CSV output backend: header `turn,ant,room`, one row per move.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use af_core::Turn;

use crate::writer::TranscriptWriter;
use crate::{MoveRow, OutputResult};

pub struct CsvWriter<W: Write> {
    inner:    Writer<W>,
    finished: bool,
}

impl<W: Write> CsvWriter<W> {
    /// Wrap `out` and write the header row.
    pub fn new(out: W) -> OutputResult<Self> {
        let mut inner = Writer::from_writer(out);
        inner.write_record(["turn", "ant", "room"])?;
        Ok(Self { inner, finished: false })
    }

    pub fn get_ref(&self) -> &W {
        self.inner.get_ref()
    }
}

impl CsvWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> TranscriptWriter for CsvWriter<W> {
    fn write_turn(&mut self, _turn: Turn, rows: &[MoveRow<'_>]) -> OutputResult<()> {
        for row in rows {
            self.inner.write_record(&[
                row.turn.to_string(),
                row.ant.to_string(),
                row.room.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}
