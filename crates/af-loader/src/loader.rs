//! Colony description loader.
//!
//! # Format
//!
//! ```text
//! 3            <- ant count, first non-empty line
//! ##start
//! start 0 0    <- room: name x y
//! mid 1 0
//! ##end
//! end 2 0
//! start-mid    <- tunnel: name-name
//! mid-end
//! ```
//!
//! | Line               | Meaning                                          |
//! |--------------------|--------------------------------------------------|
//! | `##start`/`##end`  | the next room is the start / end room            |
//! | `#…`               | comment (unknown `##` commands included)         |
//! | `name x y`         | room with integer display coordinates            |
//! | `a-b`              | tunnel; the first one ends the room section      |
//! | empty              | ignored                                          |
//!
//! A line is a tunnel only when it is a single token containing `-`, so
//! rooms may have negative coordinates.

use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use af_colony::{Colony, ColonyBuilder, Coord, RoomRole};
use af_core::FarmConfig;

use crate::{LoadError, LoadResult};

/// What the loader yields: the validated colony and the ant count.
pub struct LoadedFarm {
    pub colony:    Colony,
    pub ant_count: u32,
}

// ── Parser state ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Section {
    AntCount,
    Rooms,
    Tunnels,
}

/// Room-role commands seen since the last room line.
#[derive(Default)]
struct Pending {
    start: bool,
    end:   bool,
}

impl Pending {
    fn take_role(&mut self, line: usize) -> LoadResult<RoomRole> {
        let role = match (self.start, self.end) {
            (true, true) => {
                return Err(LoadError::at(line, "room cannot be both start and end"));
            }
            (true, false) => RoomRole::Start,
            (false, true) => RoomRole::End,
            (false, false) => RoomRole::Interior,
        };
        *self = Pending::default();
        Ok(role)
    }
}

// ── GraphLoader ───────────────────────────────────────────────────────────────

/// Parses colony descriptions into a [`LoadedFarm`].
///
/// ```
/// use af_loader::GraphLoader;
///
/// let farm = GraphLoader::default()
///     .load_str("2\n##start\ns 0 0\n##end\ne 1 0\ns-e\n")
///     .unwrap();
/// assert_eq!(farm.ant_count, 2);
/// assert_eq!(farm.colony.tunnel_count(), 1);
/// ```
pub struct GraphLoader {
    max_ants: u32,
}

impl GraphLoader {
    pub fn new(max_ants: u32) -> Self {
        Self { max_ants }
    }

    pub fn from_config(config: &FarmConfig) -> Self {
        Self::new(config.max_ants)
    }

    /// Load from a file on disk.
    pub fn load_path(&self, path: &Path) -> LoadResult<LoadedFarm> {
        let file = std::fs::File::open(path)?;
        self.load_reader(BufReader::new(file))
    }

    /// Load from an in-memory description.
    pub fn load_str(&self, text: &str) -> LoadResult<LoadedFarm> {
        self.load_reader(text.as_bytes())
    }

    /// Like [`load_path`](Self::load_path) but accepts any `BufRead` source.
    pub fn load_reader<R: BufRead>(&self, reader: R) -> LoadResult<LoadedFarm> {
        let mut builder   = ColonyBuilder::new();
        let mut section   = Section::AntCount;
        let mut pending   = Pending::default();
        let mut ant_count = 0u32;

        for (i, line) in reader.lines().enumerate() {
            let line_no = i + 1;
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if section == Section::AntCount {
                ant_count = self.parse_ant_count(line, line_no)?;
                section = Section::Rooms;
                continue;
            }

            if line.starts_with('#') {
                match line {
                    "##start" => pending.start = true,
                    "##end"   => pending.end = true,
                    _ => {}
                }
                continue;
            }

            if is_tunnel_line(line) {
                section = Section::Tunnels;
                parse_tunnel(&mut builder, line, line_no)?;
                continue;
            }

            if section == Section::Tunnels {
                return Err(LoadError::at(line_no, "room definition after tunnels"));
            }
            let role = pending.take_role(line_no)?;
            parse_room(&mut builder, line, role, line_no)?;
        }

        if section == Section::AntCount {
            return Err(LoadError::Empty);
        }

        let colony = builder.build()?;
        debug!(
            rooms = colony.room_count(),
            tunnels = colony.tunnel_count(),
            ants = ant_count,
            "loaded colony"
        );
        Ok(LoadedFarm { colony, ant_count })
    }

    fn parse_ant_count(&self, line: &str, line_no: usize) -> LoadResult<u32> {
        let n: i64 = line
            .parse()
            .map_err(|_| LoadError::at(line_no, format!("invalid number of ants {line:?}")))?;
        if n <= 0 {
            return Err(LoadError::at(line_no, "number of ants must be positive"));
        }
        if n > self.max_ants as i64 {
            return Err(LoadError::at(
                line_no,
                format!("number of ants exceeds maximum limit of {}", self.max_ants),
            ));
        }
        Ok(n as u32)
    }
}

impl Default for GraphLoader {
    fn default() -> Self {
        Self::from_config(&FarmConfig::default())
    }
}

// ── Line parsers ──────────────────────────────────────────────────────────────

fn is_tunnel_line(line: &str) -> bool {
    line.contains('-') && !line.contains(char::is_whitespace)
}

fn parse_room(
    builder: &mut ColonyBuilder,
    line:    &str,
    role:    RoomRole,
    line_no: usize,
) -> LoadResult<()> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [name, x, y] = &fields[..] else {
        return Err(LoadError::at(line_no, format!("invalid room format {line:?}")));
    };
    let (Ok(x), Ok(y)) = (x.parse::<i32>(), y.parse::<i32>()) else {
        return Err(LoadError::at(line_no, format!("invalid room coordinates {line:?}")));
    };
    builder
        .add_room(name, Coord::new(x, y), role)
        .map_err(|e| LoadError::at(line_no, e.to_string()))?;
    Ok(())
}

fn parse_tunnel(builder: &mut ColonyBuilder, line: &str, line_no: usize) -> LoadResult<()> {
    let parts: Vec<&str> = line.split('-').collect();
    let [a, b] = &parts[..] else {
        return Err(LoadError::at(line_no, format!("invalid tunnel format {line:?}")));
    };
    if a.is_empty() || b.is_empty() {
        return Err(LoadError::at(line_no, format!("invalid tunnel format {line:?}")));
    }
    builder
        .add_tunnel_by_name(a, b)
        .map_err(|e| LoadError::at(line_no, e.to_string()))
}
