//! Colony graph representation and builder.
//!
//! # Data layout
//!
//! Rooms live in an arena indexed by `RoomId`.  Adjacency uses **Compressed
//! Sparse Row (CSR)** format: the neighbors of room `r` occupy the slice
//!
//! ```text
//! adj_to[ adj_start[r] .. adj_start[r+1] ]
//! ```
//!
//! Every tunnel is stored in both directions.  Within one room's slice the
//! neighbors keep the order in which their tunnels were added, which is the
//! order the path enumerator explores them in.

#[cfg(not(feature = "fx-hash"))]
use std::collections::{HashMap, HashSet};

use af_core::RoomId;

use crate::{ColonyError, ColonyResult};

#[cfg(feature = "fx-hash")]
type NameIndex = rustc_hash::FxHashMap<String, RoomId>;
#[cfg(not(feature = "fx-hash"))]
type NameIndex = HashMap<String, RoomId>;

#[cfg(feature = "fx-hash")]
type TunnelSet = rustc_hash::FxHashSet<(RoomId, RoomId)>;
#[cfg(not(feature = "fx-hash"))]
type TunnelSet = HashSet<(RoomId, RoomId)>;

// ── Room attributes ───────────────────────────────────────────────────────────

/// Integer room coordinates.  Carried for display only; no algorithm reads
/// them.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoomRole {
    Start,
    End,
    /// Any room that is neither start nor end.  Holds at most one ant.
    #[default]
    Interior,
}

// ── Colony ────────────────────────────────────────────────────────────────────

/// Undirected room graph with exactly one start and one end room.
///
/// Immutable once built.  Construct through [`ColonyBuilder`], which enforces
/// unique names, no self-loops and no duplicate tunnels.
pub struct Colony {
    /// Room names.  Indexed by `RoomId`.
    pub room_name: Vec<String>,

    /// Display coordinates.  Indexed by `RoomId`.
    pub room_coord: Vec<Coord>,

    /// CSR row pointer.  Length = `room_count + 1`.
    pub adj_start: Vec<u32>,

    /// Neighbor of each half-tunnel, grouped by source room.
    pub adj_to: Vec<RoomId>,

    start: RoomId,
    end:   RoomId,
    name_index: NameIndex,
}

impl Colony {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn room_count(&self) -> usize {
        self.room_name.len()
    }

    /// Number of undirected tunnels.
    pub fn tunnel_count(&self) -> usize {
        self.adj_to.len() / 2
    }

    // ── Room lookups ──────────────────────────────────────────────────────

    #[inline]
    pub fn start(&self) -> RoomId {
        self.start
    }

    #[inline]
    pub fn end(&self) -> RoomId {
        self.end
    }

    #[inline]
    pub fn is_start(&self, room: RoomId) -> bool {
        room == self.start
    }

    #[inline]
    pub fn is_end(&self, room: RoomId) -> bool {
        room == self.end
    }

    /// `true` for rooms subject to the one-ant-per-turn capacity.
    #[inline]
    pub fn is_interior(&self, room: RoomId) -> bool {
        room != self.start && room != self.end
    }

    pub fn role(&self, room: RoomId) -> RoomRole {
        if room == self.start {
            RoomRole::Start
        } else if room == self.end {
            RoomRole::End
        } else {
            RoomRole::Interior
        }
    }

    pub fn name(&self, room: RoomId) -> &str {
        &self.room_name[room.index()]
    }

    pub fn coord(&self, room: RoomId) -> Coord {
        self.room_coord[room.index()]
    }

    /// Look up a room by name.
    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.name_index.get(name).copied()
    }

    /// Iterator over all `RoomId`s in arena order.
    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        (0..self.room_count() as u32).map(RoomId)
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Neighbors of `room` in tunnel insertion order.
    #[inline]
    pub fn neighbors(&self, room: RoomId) -> &[RoomId] {
        let start = self.adj_start[room.index()] as usize;
        let end   = self.adj_start[room.index() + 1] as usize;
        &self.adj_to[start..end]
    }

    #[inline]
    pub fn degree(&self, room: RoomId) -> usize {
        self.neighbors(room).len()
    }

    pub fn are_adjacent(&self, a: RoomId, b: RoomId) -> bool {
        self.neighbors(a).contains(&b)
    }
}

// ── ColonyBuilder ─────────────────────────────────────────────────────────────

/// Construct a [`Colony`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use af_colony::{ColonyBuilder, Coord, RoomRole};
///
/// let mut b = ColonyBuilder::new();
/// b.add_room("start", Coord::new(0, 0), RoomRole::Start).unwrap();
/// b.add_room("mid",   Coord::new(1, 0), RoomRole::Interior).unwrap();
/// b.add_room("end",   Coord::new(2, 0), RoomRole::End).unwrap();
/// b.add_tunnel_by_name("start", "mid").unwrap();
/// b.add_tunnel_by_name("mid", "end").unwrap();
/// let colony = b.build().unwrap();
/// assert_eq!(colony.room_count(), 3);
/// assert_eq!(colony.tunnel_count(), 2);
/// ```
#[derive(Default)]
pub struct ColonyBuilder {
    names:      Vec<String>,
    coords:     Vec<Coord>,
    tunnels:    Vec<(RoomId, RoomId)>,
    tunnel_set: TunnelSet,
    name_index: NameIndex,
    start:      Option<RoomId>,
    end:        Option<RoomId>,
}

impl ColonyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room and return its `RoomId` (sequential from 0).
    pub fn add_room(&mut self, name: &str, coord: Coord, role: RoomRole) -> ColonyResult<RoomId> {
        if name.is_empty()
            || name.starts_with('#')
            || name.contains('-')
            || name.chars().any(char::is_whitespace)
        {
            return Err(ColonyError::InvalidRoomName(name.to_owned()));
        }
        if self.name_index.contains_key(name) {
            return Err(ColonyError::DuplicateRoom(name.to_owned()));
        }

        let id = RoomId(self.names.len() as u32);
        match role {
            RoomRole::Start => {
                if let Some(existing) = self.start {
                    return Err(ColonyError::MultipleStart {
                        existing: self.names[existing.index()].clone(),
                        new:      name.to_owned(),
                    });
                }
                self.start = Some(id);
            }
            RoomRole::End => {
                if let Some(existing) = self.end {
                    return Err(ColonyError::MultipleEnd {
                        existing: self.names[existing.index()].clone(),
                        new:      name.to_owned(),
                    });
                }
                self.end = Some(id);
            }
            RoomRole::Interior => {}
        }

        self.names.push(name.to_owned());
        self.coords.push(coord);
        self.name_index.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Add an undirected tunnel between two existing rooms.
    pub fn add_tunnel(&mut self, a: RoomId, b: RoomId) -> ColonyResult<()> {
        for id in [a, b] {
            if id.index() >= self.names.len() {
                return Err(ColonyError::RoomNotFound(id));
            }
        }
        if a == b {
            return Err(ColonyError::SelfLoop(self.names[a.index()].clone()));
        }
        let key = if a < b { (a, b) } else { (b, a) };
        if !self.tunnel_set.insert(key) {
            return Err(ColonyError::DuplicateTunnel {
                a: self.names[a.index()].clone(),
                b: self.names[b.index()].clone(),
            });
        }
        self.tunnels.push((a, b));
        Ok(())
    }

    /// Convenience: resolve both names, then [`add_tunnel`](Self::add_tunnel).
    pub fn add_tunnel_by_name(&mut self, a: &str, b: &str) -> ColonyResult<()> {
        let ra = self.room_id(a).ok_or_else(|| ColonyError::UnknownRoom(a.to_owned()))?;
        let rb = self.room_id(b).ok_or_else(|| ColonyError::UnknownRoom(b.to_owned()))?;
        self.add_tunnel(ra, rb)
    }

    /// Look up a room added earlier.
    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.name_index.get(name).copied()
    }

    pub fn room_count(&self) -> usize { self.names.len() }
    pub fn tunnel_count(&self) -> usize { self.tunnels.len() }

    /// Consume the builder and produce a [`Colony`].
    ///
    /// Fails if no start or no end room was added.
    pub fn build(self) -> ColonyResult<Colony> {
        let start = self.start.ok_or(ColonyError::MissingStart)?;
        let end   = self.end.ok_or(ColonyError::MissingEnd)?;
        let room_count = self.names.len();

        // Expand each tunnel into both half-edges, then group by source.
        // The sort must be stable so neighbor order follows insertion order.
        let mut half: Vec<(RoomId, RoomId)> = Vec::with_capacity(self.tunnels.len() * 2);
        for &(a, b) in &self.tunnels {
            half.push((a, b));
            half.push((b, a));
        }
        half.sort_by_key(|&(from, _)| from.0);

        let adj_to: Vec<RoomId> = half.iter().map(|&(_, to)| to).collect();

        let mut adj_start = vec![0u32; room_count + 1];
        for &(from, _) in &half {
            adj_start[from.index() + 1] += 1;
        }
        for i in 1..=room_count {
            adj_start[i] += adj_start[i - 1];
        }
        debug_assert_eq!(adj_start[room_count] as usize, adj_to.len());

        Ok(Colony {
            room_name:  self.names,
            room_coord: self.coords,
            adj_start,
            adj_to,
            start,
            end,
            name_index: self.name_index,
        })
    }
}
