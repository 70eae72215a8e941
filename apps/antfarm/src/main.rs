//! antfarm: route ants through a colony of rooms and tunnels.
//!
//! Reads a colony description, moves every ant from `##start` to `##end`
//! with interior rooms holding one ant at a time, and prints the turns.
//!
//! ```text
//! $ antfarm colony.txt
//! 3
//! ##start
//! start 0 0
//! …
//!
//! L1-mid
//! L1-end L2-mid
//! ```
//!
//! Log output goes to stderr; set `RUST_LOG=debug` for stage summaries.

mod report;

#[cfg(test)]
mod tests;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use af_core::config::MAX_EXHAUSTIVE_PATHS;
use af_core::{DirectTunnel, FarmConfig, SelectionStrategy};
use af_loader::GraphLoader;
use af_output::{CsvWriter, TextWriter, TranscriptObserver, TranscriptWriter};
use af_sim::{NoopObserver, Sim, SimBuilder};

use report::Report;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "antfarm", version)]
#[command(about = "Move ants from the start room to the end room in as few turns as possible")]
struct Args {
    /// Colony description file
    file: PathBuf,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Disjoint-path selection strategy
    #[arg(long, value_enum, default_value_t = Selector::Greedy)]
    selector: Selector,

    /// Largest path count searched exactly by the exhaustive selector
    #[arg(long, default_value_t = MAX_EXHAUSTIVE_PATHS)]
    exhaustive_limit: usize,

    /// Printed before every ant number in a move record
    #[arg(long, default_value = "L")]
    ant_prefix: String,

    /// Largest accepted ant count
    #[arg(long, default_value_t = 10_000)]
    max_ants: u32,

    /// How many ants may cross a start-to-end tunnel per turn
    #[arg(long, value_enum, default_value_t = Lane::Single)]
    direct_tunnel: Lane,

    /// Print only the moves, without echoing the colony description
    #[arg(long)]
    moves_only: bool,

    /// Write to this file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Csv,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Selector {
    Greedy,
    Exhaustive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Lane {
    Single,
    Unbounded,
    RunHead,
}

impl Args {
    fn config(&self) -> FarmConfig {
        FarmConfig {
            ant_prefix:    self.ant_prefix.clone(),
            max_ants:      self.max_ants,
            selection:     match self.selector {
                Selector::Greedy     => SelectionStrategy::GreedySeed,
                Selector::Exhaustive => SelectionStrategy::Exhaustive {
                    max_paths: self.exhaustive_limit,
                },
            },
            direct_tunnel: match self.direct_tunnel {
                Lane::Single    => DirectTunnel::Single,
                Lane::Unbounded => DirectTunnel::Unbounded,
                Lane::RunHead   => DirectTunnel::RunHead,
            },
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    match run(&args).and_then(|out| emit(&args, &out)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Load, simulate and render into a buffer.  Nothing is printed until the
/// whole run has succeeded.
fn run(args: &Args) -> Result<Vec<u8>> {
    let config = args.config();
    config.validate()?;

    let input = std::fs::read_to_string(&args.file)
        .map_err(|e| anyhow!("opening file {}: {e}", args.file.display()))?;
    let farm = GraphLoader::from_config(&config).load_str(&input)?;
    info!(
        rooms = farm.colony.room_count(),
        tunnels = farm.colony.tunnel_count(),
        ants = farm.ant_count,
        "colony loaded"
    );

    let colony  = &farm.colony;
    let mut sim = SimBuilder::new(colony, farm.ant_count, config.clone()).build()?;
    let mut out = Vec::new();

    match args.format {
        Format::Text => {
            if !args.moves_only {
                echo_input(&mut out, &input)?;
            }
            let writer = TextWriter::new(&mut out, config.ant_prefix.as_str());
            stream(&mut sim, TranscriptObserver::new(writer, colony))?;
        }
        Format::Csv => {
            let writer = CsvWriter::new(&mut out)?;
            stream(&mut sim, TranscriptObserver::new(writer, colony))?;
        }
        Format::Json => {
            let transcript = sim.run(&mut NoopObserver)?;
            let report = Report::new(&sim, &transcript, farm.ant_count);
            serde_json::to_writer_pretty(&mut out, &report)?;
            out.push(b'\n');
        }
    }
    Ok(out)
}

/// Run `sim` while `observer` writes every turn.
fn stream<W: TranscriptWriter>(
    sim:          &mut Sim<'_>,
    mut observer: TranscriptObserver<'_, W>,
) -> Result<()> {
    sim.run(&mut observer)?;
    match observer.take_error() {
        Some(e) => Err(e.into()),
        None    => Ok(()),
    }
}

/// The colony description as given, then one blank line.
fn echo_input(out: &mut Vec<u8>, input: &str) -> Result<()> {
    out.write_all(input.as_bytes())?;
    if !input.ends_with('\n') {
        out.push(b'\n');
    }
    out.push(b'\n');
    Ok(())
}

fn emit(args: &Args, out: &[u8]) -> Result<()> {
    match &args.output {
        Some(path) => std::fs::write(path, out)
            .map_err(|e| anyhow!("writing {}: {e}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(out)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
