//! Simple start→end paths and their exhaustive enumeration.

use tracing::debug;

use af_core::RoomId;

use crate::Colony;

// ── Path ──────────────────────────────────────────────────────────────────────

/// An ordered, simple route from the start room to the end room.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    /// Rooms in travel order, `rooms[0] == start`, `rooms[last] == end`.
    pub rooms: Vec<RoomId>,
}

impl Path {
    pub fn new(rooms: Vec<RoomId>) -> Self {
        Self { rooms }
    }

    /// Number of tunnels crossed, i.e. moves one ant makes along this path.
    #[inline]
    pub fn length(&self) -> usize {
        self.rooms.len().saturating_sub(1)
    }

    /// Rooms strictly between start and end.
    pub fn interior(&self) -> &[RoomId] {
        match self.rooms.len() {
            0..=2 => &[],
            n => &self.rooms[1..n - 1],
        }
    }

    /// `true` for the single-tunnel path start→end.
    #[inline]
    pub fn is_direct(&self) -> bool {
        self.rooms.len() == 2
    }

    /// `true` if some interior room appears in both paths.
    pub fn shares_interior(&self, other: &Path) -> bool {
        self.interior().iter().any(|r| other.interior().contains(r))
    }

    /// Check the path against `colony`: starts at start, ends at end, no room
    /// repeated, every consecutive pair adjacent.
    pub fn is_valid_in(&self, colony: &Colony) -> bool {
        let (Some(&first), Some(&last)) = (self.rooms.first(), self.rooms.last()) else {
            return false;
        };
        if !colony.is_start(first) || !colony.is_end(last) || self.rooms.len() < 2 {
            return false;
        }
        let mut seen = vec![false; colony.room_count()];
        for &room in &self.rooms {
            if room.index() >= seen.len() || seen[room.index()] {
                return false;
            }
            seen[room.index()] = true;
        }
        self.rooms.windows(2).all(|w| colony.are_adjacent(w[0], w[1]))
    }

    /// Room names joined by `->`, for logs and reports.
    pub fn render(&self, colony: &Colony) -> String {
        self.rooms
            .iter()
            .map(|&r| colony.name(r))
            .collect::<Vec<_>>()
            .join("->")
    }
}

// ── Enumeration ───────────────────────────────────────────────────────────────

/// Every simple path from `colony.start()` to `colony.end()`.
///
/// Depth-first over each room's neighbors in stored order, with a `Vec<bool>`
/// visited set indexed by `RoomId`.  The traversal uses an explicit stack of
/// `(room, next neighbor position)` frames; the output order is the one a
/// recursive backtracking search would produce.
///
/// An empty result means start and end are disconnected.  That is not an
/// error here; the simulator reports it.
///
/// The number of simple paths can grow exponentially with the room count.
pub fn enumerate_paths(colony: &Colony) -> Vec<Path> {
    let start = colony.start();
    let end   = colony.end();

    let mut paths   = Vec::new();
    let mut visited = vec![false; colony.room_count()];
    let mut current = vec![start];
    let mut stack: Vec<(RoomId, usize)> = vec![(start, 0)];
    visited[start.index()] = true;

    while let Some(frame) = stack.last_mut() {
        let (room, cursor) = *frame;
        let neighbors = colony.neighbors(room);

        // Backtrack: all neighbors tried.
        if cursor >= neighbors.len() {
            stack.pop();
            current.pop();
            visited[room.index()] = false;
            continue;
        }
        frame.1 += 1;

        let next = neighbors[cursor];
        if visited[next.index()] {
            continue;
        }
        if next == end {
            current.push(next);
            paths.push(Path::new(current.clone()));
            current.pop();
            continue;
        }

        visited[next.index()] = true;
        current.push(next);
        stack.push((next, 0));
    }

    debug!(
        rooms = colony.room_count(),
        tunnels = colony.tunnel_count(),
        paths = paths.len(),
        "enumerated simple paths"
    );
    paths
}
