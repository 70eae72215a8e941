//! JSON run report for `--format json`.

use serde::Serialize;

use af_core::FarmConfig;
use af_sim::{Sim, Transcript};

#[derive(Serialize, Debug)]
pub struct Report<'a> {
    pub config:     &'a FarmConfig,
    pub ants:       u32,
    pub turns:      usize,
    pub moves:      usize,
    pub paths:      Vec<PathReport>,
    /// Transcript lines without trailing newlines.
    pub transcript: Vec<String>,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct PathReport {
    pub rooms:  Vec<String>,
    pub length: usize,
    pub ants:   u32,
}

impl<'a> Report<'a> {
    pub fn new(sim: &'a Sim<'_>, transcript: &Transcript, ants: u32) -> Self {
        let colony = sim.colony();
        let paths = sim
            .paths
            .iter()
            .zip(&sim.assignment.load)
            .map(|(path, &load)| PathReport {
                rooms:  path.rooms.iter().map(|&r| colony.name(r).to_owned()).collect(),
                length: path.length(),
                ants:   load,
            })
            .collect();
        let prefix = sim.config.ant_prefix.as_str();
        Self {
            config: &sim.config,
            ants,
            turns: transcript.turn_count(),
            moves: transcript.move_count(),
            paths,
            transcript: transcript
                .turns
                .iter()
                .map(|moves| Transcript::render_line(moves, colony, prefix))
                .collect(),
        }
    }
}
