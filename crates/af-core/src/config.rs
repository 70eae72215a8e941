//! Run configuration shared by the loader, the simulator and the CLI.
//!
//! The binary fills a [`FarmConfig`] from command-line flags; library users
//! usually start from `FarmConfig::default()` and override single fields.

use crate::{CoreError, CoreResult};

/// Largest path count the exhaustive selector accepts.  Conflict sets are
/// stored as `u64` bitmasks.
pub const MAX_EXHAUSTIVE_PATHS: usize = 64;

// ── SelectionStrategy ─────────────────────────────────────────────────────────

/// How the set of interior-disjoint paths is chosen from the enumerated ones.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionStrategy {
    /// Best-seed greedy heuristic.  Each path in turn seeds a set that then
    /// takes, shortest first, every other path sharing no interior room
    /// with it.  The largest set wins, the earliest seed on ties.
    #[default]
    GreedySeed,
    /// Exact maximum interior-disjoint set by branch and bound.  When more
    /// than `max_paths` paths exist the greedy heuristic is used instead.
    Exhaustive { max_paths: usize },
}

impl SelectionStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            SelectionStrategy::GreedySeed        => "greedy",
            SelectionStrategy::Exhaustive { .. } => "exhaustive",
        }
    }
}

impl std::fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DirectTunnel ──────────────────────────────────────────────────────────────

/// Capacity of a tunnel that links the start room straight to the end room.
///
/// Every other tunnel is bounded by the one-ant capacity of the interior room
/// at one of its ends, so this is the only tunnel whose per-turn throughput
/// needs a rule of its own.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectTunnel {
    /// At most one ant crosses the direct tunnel per turn.
    #[default]
    Single,
    /// Every waiting ant may cross the direct tunnel in the same turn.
    Unbounded,
    /// An ant assigned to the direct path crosses only when it heads a run
    /// of unarrived ants: no lower-numbered ant stands between it and the
    /// start of the turn or the nearest arrived ant.  Waiting and blocked
    /// ants still lengthen the run.
    RunHead,
}

// ── FarmConfig ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FarmConfig {
    /// Printed before every ant number in a move record (`L1-room`).
    pub ant_prefix: String,

    /// Upper bound on the ant count accepted by the loader.
    pub max_ants: u32,

    pub selection: SelectionStrategy,

    pub direct_tunnel: DirectTunnel,
}

impl FarmConfig {
    /// Reject settings that would produce an unreadable transcript or an
    /// unusable selector.
    pub fn validate(&self) -> CoreResult<()> {
        if self.ant_prefix.is_empty() {
            return Err(CoreError::Config("ant prefix must not be empty".into()));
        }
        if self.ant_prefix.chars().any(|c| c.is_whitespace() || c == '-') {
            return Err(CoreError::Config(format!(
                "ant prefix {:?} must not contain whitespace or '-'",
                self.ant_prefix
            )));
        }
        if self.max_ants == 0 {
            return Err(CoreError::Config("max_ants must be positive".into()));
        }
        if let SelectionStrategy::Exhaustive { max_paths } = self.selection {
            if max_paths == 0 || max_paths > MAX_EXHAUSTIVE_PATHS {
                return Err(CoreError::Config(format!(
                    "exhaustive path limit {max_paths} outside 1..={MAX_EXHAUSTIVE_PATHS}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            ant_prefix:    "L".to_owned(),
            max_ants:      10_000,
            selection:     SelectionStrategy::GreedySeed,
            direct_tunnel: DirectTunnel::Single,
        }
    }
}
