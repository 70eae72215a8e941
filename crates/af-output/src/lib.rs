//! `af-output`: transcript writers for the antfarm workspace.
//!
//! | Writer                | Output                                         |
//! |-----------------------|------------------------------------------------|
//! | [`TextWriter`]        | verbatim transcript, one line per turn         |
//! | [`CsvWriter`]         | `turn,ant,room` rows, one per move             |
//!
//! Both implement [`TranscriptWriter`].  Write a finished transcript with
//! [`write_transcript`], or stream turns while the simulation runs with
//! [`TranscriptObserver`], which implements `af_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use af_output::{TextWriter, TranscriptObserver};
//!
//! let mut obs = TranscriptObserver::new(TextWriter::new(std::io::stdout(), "L"), &colony);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TranscriptObserver;
pub use row::MoveRow;
pub use text::TextWriter;
pub use writer::{write_transcript, TranscriptWriter};
